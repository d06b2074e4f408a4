#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
/// DMG hardware revision.
///
/// Only the register contents left behind by each revision's boot ROM differ
/// as far as this core is concerned.
pub enum DmgRevision {
    Rev0,
    RevA,
    RevB,
    #[default]
    RevC,
}

impl DmgRevision {
    #[inline]
    /// Returns whether this revision shipped the original DMG0 boot ROM.
    pub const fn is_dmg0(self) -> bool {
        matches!(self, DmgRevision::Rev0)
    }

    /// Short lowercase name, as accepted on the command line.
    pub const fn label(self) -> &'static str {
        match self {
            DmgRevision::Rev0 => "rev0",
            DmgRevision::RevA => "rev-a",
            DmgRevision::RevB => "rev-b",
            DmgRevision::RevC => "rev-c",
        }
    }
}
