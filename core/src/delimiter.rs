/// Field delimiter used by a dictionary or an input file.
/// Tab splits on every single tab and keeps empty fields,
/// Space splits on runs of whitespace and ignores leading and trailing whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Tab,
    Space,
}

impl Delimiter {
    pub fn from_space_flag(use_space: bool) -> Self {
        if use_space {
            Delimiter::Space
        } else {
            Delimiter::Tab
        }
    }

    /// Split one line (without its terminator) into fields.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Tab => line.split('\t').collect(),
            Delimiter::Space => line.split_whitespace().collect(),
        }
    }

    /// Separator written between output fields.
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Space => b' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Delimiter;

    #[test]
    fn tab_keeps_empty_fields() {
        assert_eq!(Delimiter::Tab.split("a\t\tc"), vec!["a", "", "c"]);
        assert_eq!(Delimiter::Tab.split("a b\tc"), vec!["a b", "c"]);
    }

    #[test]
    fn space_collapses_whitespace_runs() {
        assert_eq!(Delimiter::Space.split("  cat   dog\tbird "), vec!["cat", "dog", "bird"]);
        assert!(Delimiter::Space.split("   ").is_empty());
    }

    #[test]
    fn space_flag() {
        assert_eq!(Delimiter::from_space_flag(true), Delimiter::Space);
        assert_eq!(Delimiter::from_space_flag(false), Delimiter::Tab);
        assert_eq!(Delimiter::Space.as_byte(), b' ');
        assert_eq!(Delimiter::Tab.as_byte(), b'\t');
    }
}
