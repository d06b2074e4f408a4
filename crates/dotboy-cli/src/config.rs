use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dotboy_core::compositor::Palette;
use dotboy_core::hardware::DmgRevision;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Revision {
    Rev0,
    RevA,
    RevB,
    #[default]
    RevC,
}

impl From<Revision> for DmgRevision {
    fn from(rev: Revision) -> Self {
        match rev {
            Revision::Rev0 => DmgRevision::Rev0,
            Revision::RevA => DmgRevision::RevA,
            Revision::RevB => DmgRevision::RevB,
            Revision::RevC => DmgRevision::RevC,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteChoice {
    #[default]
    Classic,
    Grayscale,
    /// Lightest shade first, as `#RRGGBB`.
    Custom([String; 4]),
}

impl PaletteChoice {
    pub fn to_palette(&self) -> Result<Palette, CliError> {
        match self {
            Self::Classic => Ok(Palette::CLASSIC),
            Self::Grayscale => Ok(Palette::GRAYSCALE),
            Self::Custom(colours) => {
                let mut shades = [[0u8; 3]; 4];
                for (shade, text) in shades.iter_mut().zip(colours) {
                    *shade = parse_colour(text)?;
                }
                Ok(Palette { shades })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DotboyConfig {
    pub revision: Option<Revision>,
    pub palette: PaletteChoice,
    pub frames: Option<u64>,
    pub breakpoints: Vec<String>,
    pub log_level: Option<String>,
}

impl DotboyConfig {
    pub fn breakpoint_addresses(&self) -> Result<Vec<u16>, CliError> {
        self.breakpoints.iter().map(|s| parse_address(s)).collect()
    }
}

pub fn default_config_path() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("dotboy").join("dotboy.toml");
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join("dotboy")
            .join("dotboy.toml");
    }

    PathBuf::from("dotboy.toml")
}

/// A missing file at the default location is not an error; an explicitly
/// requested one is.
pub fn load(explicit: Option<&Path>) -> Result<DotboyConfig, CliError> {
    match explicit {
        Some(path) => load_from_file(path),
        None => {
            let path = default_config_path();
            if path.exists() {
                load_from_file(&path)
            } else {
                Ok(DotboyConfig::default())
            }
        }
    }
}

pub fn load_from_file(path: &Path) -> Result<DotboyConfig, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<DotboyConfig>(&text).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Accepts `0150`, `0x0150` and `$0150`.
pub fn parse_address(text: &str) -> Result<u16, CliError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('$'))
        .unwrap_or(trimmed);
    u16::from_str_radix(digits, 16).map_err(|_| CliError::Address(text.to_string()))
}

fn parse_colour(text: &str) -> Result<[u8; 3], CliError> {
    let invalid = || CliError::Colour(text.to_string());
    let digits = text.trim().strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 {
        return Err(invalid());
    }
    let rgb = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    let [_, r, g, b] = rgb.to_be_bytes();
    Ok([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_every_key() {
        let file = write_config(
            r##"
revision = "rev-a"
palette = "grayscale"
frames = 120
breakpoints = ["0150", "$C000"]
log_level = "debug"
"##,
        );
        let cfg = load_from_file(file.path()).unwrap();
        assert_eq!(cfg.revision, Some(Revision::RevA));
        assert_eq!(cfg.palette, PaletteChoice::Grayscale);
        assert_eq!(cfg.frames, Some(120));
        assert_eq!(cfg.breakpoint_addresses().unwrap(), vec![0x0150, 0xC000]);
        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let file = write_config("frames = 3\n");
        let cfg = load_from_file(file.path()).unwrap();
        assert_eq!(cfg.revision, None);
        assert_eq!(cfg.palette, PaletteChoice::Classic);
        assert!(cfg.breakpoints.is_empty());
    }

    #[test]
    fn custom_palette_parses_hex_colours() {
        let file = write_config(
            r##"
[palette]
custom = ["#FFFFFF", "#c0c0c0", "#404040", "#000000"]
"##,
        );
        let cfg = load_from_file(file.path()).unwrap();
        let palette = cfg.palette.to_palette().unwrap();
        assert_eq!(palette.shades[1], [0xC0, 0xC0, 0xC0]);
        assert_eq!(palette.shades[3], [0, 0, 0]);
    }

    #[test]
    fn bad_colour_is_rejected() {
        let choice = PaletteChoice::Custom([
            "#FFFFFF".into(),
            "C0C0C0".into(),
            "#404040".into(),
            "#000000".into(),
        ]);
        assert!(matches!(choice.to_palette(), Err(CliError::Colour(c)) if c == "C0C0C0"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = write_config("frames = \"lots\"\n");
        assert!(matches!(
            load_from_file(file.path()),
            Err(CliError::ConfigParse { .. })
        ));
    }

    #[test]
    fn explicit_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            load(Some(&path)),
            Err(CliError::ConfigRead { .. })
        ));
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = DotboyConfig {
            revision: Some(Revision::Rev0),
            palette: PaletteChoice::Classic,
            frames: None,
            breakpoints: vec!["0x0100".into()],
            log_level: None,
        };
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(toml::from_str::<DotboyConfig>(&text).unwrap(), cfg);
    }

    #[test]
    fn addresses_accept_common_prefixes() {
        assert_eq!(parse_address("0150").unwrap(), 0x0150);
        assert_eq!(parse_address("0xc000").unwrap(), 0xC000);
        assert_eq!(parse_address("$FFFF").unwrap(), 0xFFFF);
        assert!(parse_address("10000").is_err());
        assert!(parse_address("zz").is_err());
    }
}
