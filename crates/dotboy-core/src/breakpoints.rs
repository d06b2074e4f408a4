use std::collections::BTreeSet;

/// Execution breakpoints checked by the driving loop before each instruction.
///
/// Resuming from a hit lets the instruction at that address run once before
/// the breakpoint can fire there again.
#[derive(Debug, Default, Clone)]
pub struct BreakpointEngine {
    addresses: BTreeSet<u16>,
    suspended: bool,
    resume_from: Option<u16>,
}

impl BreakpointEngine {
    pub fn set_breakpoints(&mut self, addresses: impl IntoIterator<Item = u16>) {
        self.addresses = addresses.into_iter().collect();
        self.resume_from = None;
    }

    /// Returns `false` if `addr` was already set.
    pub fn add(&mut self, addr: u16) -> bool {
        self.addresses.insert(addr)
    }

    pub fn remove(&mut self, addr: u16) -> bool {
        if self.resume_from == Some(addr) {
            self.resume_from = None;
        }
        self.addresses.remove(&addr)
    }

    pub fn clear(&mut self) {
        self.addresses.clear();
        self.resume_from = None;
    }

    pub fn contains(&self, addr: u16) -> bool {
        self.addresses.contains(&addr)
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn addresses(&self) -> impl Iterator<Item = u16> + '_ {
        self.addresses.iter().copied()
    }

    pub fn set_suspended(&mut self, value: bool) {
        self.suspended = value;
        if value {
            self.resume_from = None;
        }
    }

    pub fn suspended(&self) -> bool {
        self.suspended
    }

    /// Let execution continue past the breakpoint at `pc` once.
    pub fn resume(&mut self, pc: u16) {
        self.resume_from = Some(pc);
    }

    /// Whether the loop should stop before executing at `pc`.
    pub fn should_break(&mut self, pc: u16) -> bool {
        if let Some(skip) = self.resume_from.take() {
            if skip == pc {
                return false;
            }
        }
        !self.suspended && self.addresses.contains(&pc)
    }
}
