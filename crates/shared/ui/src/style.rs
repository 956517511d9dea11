use std::borrow::Cow;
use std::fmt;

/// Ordered list of CSS declarations, rendered as an inline `style` value.
///
/// Setting a property twice keeps its original position and replaces the value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(Cow<'static, str>, String)>,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self { decls: Vec::new() }
    }

    #[must_use]
    pub fn set(mut self, property: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        let property = property.into();
        let value = value.to_string();
        match self.decls.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.decls.push((property, value)),
        }
        self
    }

    /// Like [`Style::set`], skipped when `value` is `None`.
    #[must_use]
    pub fn set_opt(self, property: impl Into<Cow<'static, str>>, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(v) => self.set(property, v),
            None => self,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}
