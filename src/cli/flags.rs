use crate::pass::CharClass;
use crate::settings::Settings;

#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub length: Option<i64>,
}

impl CliFlags {
    /// Layer the flags over `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(length) = self.length {
            settings.length = length;
        }
        for (off, class) in [
            (self.no_upper, CharClass::Upper),
            (self.no_lower, CharClass::Lower),
            (self.no_digits, CharClass::Digits),
            (self.no_special, CharClass::Special),
        ] {
            if off {
                settings.classes.set(class, false);
            }
        }
        settings.to_clipboard |= self.clipboard;
        settings.quiet |= self.quiet;
    }
}
