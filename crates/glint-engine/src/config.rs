//! Surface configuration and the pre-creation hint store.
//!
//! Hints exist for callers porting from hint-key APIs; the typed fields on
//! [`Config`] are public, so setting them directly is equally supported and
//! cannot mismatch. Either way, configuration is consumed once, atomically,
//! when the surface is created. Mutation after that point is rejected by the
//! context rather than silently ignored.

use crate::error::{Error, Result};

/// Surface-creation options.
///
/// Defaults are usable stand-alone: a caller that sets zero hints still gets
/// a resizable, vsynced 1024×720 window with no fps cap and no antialiasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub resizable: bool,
    pub vsync: bool,
    /// Frame-rate cap; `0` means uncapped.
    pub fps_limit: u32,
    /// MSAA sample count; `0` (or `1`) means no antialiasing.
    pub msaa: u32,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resizable: true,
            vsync: true,
            fps_limit: 0,
            msaa: 0,
            title: "glint window".to_string(),
            width: 1024,
            height: 720,
        }
    }
}

/// Hint keys accepted by [`Config::apply_hint`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HintKey {
    Resizable,
    Vsync,
    FpsLimit,
    Msaa,
    Title,
    Width,
    Height,
}

impl HintKey {
    /// Name of the variant this key accepts, for error messages.
    fn expects(self) -> &'static str {
        match self {
            HintKey::Resizable | HintKey::Vsync => "Bool",
            HintKey::FpsLimit | HintKey::Msaa | HintKey::Width | HintKey::Height => "Int",
            HintKey::Title => "Text",
        }
    }
}

/// Closed value union for hints.
///
/// Each key accepts exactly one variant; supplying another is a configuration
/// error, never a silent default.
#[derive(Debug, Clone, PartialEq)]
pub enum HintValue {
    Bool(bool),
    Int(u32),
    Text(String),
}

impl HintValue {
    fn variant_name(&self) -> &'static str {
        match self {
            HintValue::Bool(_) => "Bool",
            HintValue::Int(_) => "Int",
            HintValue::Text(_) => "Text",
        }
    }
}

impl Config {
    /// Writes one hint into the configuration.
    ///
    /// The key/value pairing is matched exhaustively; a mismatched variant
    /// fails and leaves the previous value unchanged.
    pub fn apply_hint(&mut self, key: HintKey, value: HintValue) -> Result<()> {
        match (key, value) {
            (HintKey::Resizable, HintValue::Bool(v)) => self.resizable = v,
            (HintKey::Vsync, HintValue::Bool(v)) => self.vsync = v,
            (HintKey::FpsLimit, HintValue::Int(v)) => self.fps_limit = v,
            (HintKey::Msaa, HintValue::Int(v)) => self.msaa = v,
            (HintKey::Title, HintValue::Text(v)) => self.title = v,
            (HintKey::Width, HintValue::Int(v)) => self.width = v,
            (HintKey::Height, HintValue::Int(v)) => self.height = v,
            (key, value) => {
                return Err(Error::config(format!(
                    "hint {key:?} expects a {} value, got {}",
                    key.expects(),
                    value.variant_name(),
                )));
            }
        }
        Ok(())
    }

    /// Checks that the configuration can back a surface.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::config(format!(
                "surface size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = Config::default();
        assert!(cfg.resizable);
        assert!(cfg.vsync);
        assert_eq!(cfg.fps_limit, 0);
        assert_eq!(cfg.msaa, 0);
        cfg.validate().unwrap();
    }

    #[test]
    fn hints_write_every_field() {
        let mut cfg = Config::default();
        cfg.apply_hint(HintKey::Resizable, HintValue::Bool(false)).unwrap();
        cfg.apply_hint(HintKey::Vsync, HintValue::Bool(false)).unwrap();
        cfg.apply_hint(HintKey::FpsLimit, HintValue::Int(60)).unwrap();
        cfg.apply_hint(HintKey::Msaa, HintValue::Int(4)).unwrap();
        cfg.apply_hint(HintKey::Title, HintValue::Text("T".into())).unwrap();
        cfg.apply_hint(HintKey::Width, HintValue::Int(800)).unwrap();
        cfg.apply_hint(HintKey::Height, HintValue::Int(600)).unwrap();

        assert_eq!(
            cfg,
            Config {
                resizable: false,
                vsync: false,
                fps_limit: 60,
                msaa: 4,
                title: "T".into(),
                width: 800,
                height: 600,
            }
        );
    }

    #[test]
    fn mismatched_variant_fails_and_preserves_value() {
        let mut cfg = Config::default();
        let before = cfg.title.clone();

        let err = cfg.apply_hint(HintKey::Title, HintValue::Int(3)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert_eq!(cfg.title, before);

        let err = cfg.apply_hint(HintKey::Vsync, HintValue::Text("on".into())).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(cfg.vsync);
    }

    #[test]
    fn zero_size_is_invalid() {
        let mut cfg = Config::default();
        cfg.apply_hint(HintKey::Width, HintValue::Int(0)).unwrap();
        assert!(matches!(cfg.validate(), Err(Error::Config { .. })));
    }
}
