//! Conditional inline style composition.

use std::fmt::{self, Display};

use tracing::trace;

use crate::attributes::Attributes;
use crate::condition::Condition;

/// Bag key read by [`StyleListBuilder::add_style_from_attributes`].
const STYLE_KEY: &str = "style";

/// A fluent builder for conditional `prop:value;` inline style lists.
///
/// ```
/// use attr_strings::StyleListBuilder;
///
/// let on_top = false;
/// let style = StyleListBuilder::new("background-color", "DodgerBlue")
///     .add_style_when("z-index", 999, on_top)
///     .add_style_when("z-index", -1, !on_top)
///     .build();
/// assert_eq!(style, "background-color:DodgerBlue;z-index:-1;");
/// ```
///
/// Every declaration is self-terminated with a semicolon, so no further
/// separator is inserted between declarations or around merged content.
/// There is no prefix concept here; only the class builder namespaces its
/// tokens.
#[derive(Clone, Debug, Default)]
pub struct StyleListBuilder {
    buffer: String,
}

impl StyleListBuilder {
    /// Create a builder seeded with a single declaration. Use
    /// [`StyleListBuilder::default`] for an empty builder.
    pub fn new(prop: impl Display, value: impl Display) -> Self {
        Self {
            buffer: format!("{prop}:{value};"),
        }
    }

    /// Append raw text with no separator or terminator. The text is expected
    /// to already be well-formed `prop:value;` content.
    pub fn add_value(mut self, value: impl AsRef<str>) -> Self {
        self.buffer.push_str(value.as_ref());
        self
    }

    /// Append `prop:value;` unconditionally.
    pub fn add_style(self, prop: impl Display, value: impl Display) -> Self {
        self.push(prop, value, Condition::Always)
    }

    /// Append `prop:value;` only if `when` is true. A false condition is a
    /// complete no-op; the declaration is never even formatted.
    pub fn add_style_when(self, prop: impl Display, value: impl Display, when: bool) -> Self {
        self.push(prop, value, Condition::When(when))
    }

    /// Append `prop:value;` gated by a predicate, evaluated exactly once at
    /// this call. A panicking predicate propagates to the caller.
    pub fn add_style_with(
        self,
        prop: impl Display,
        value: impl Display,
        when: impl FnOnce() -> bool,
    ) -> Self {
        self.push(prop, value, Condition::Lazy(Box::new(when)))
    }

    /// Append another builder's finalized declarations verbatim. Each
    /// declaration already ends in `;`, so nothing extra is inserted.
    pub fn merge(self, other: StyleListBuilder) -> Self {
        self.push_group(other, Condition::Always)
    }

    /// [`merge`](Self::merge) gated on a flag. The nested builder is only
    /// finalized if the condition holds.
    pub fn merge_when(self, other: StyleListBuilder, when: bool) -> Self {
        self.push_group(other, Condition::When(when))
    }

    /// [`merge`](Self::merge) gated on a predicate, evaluated exactly once.
    pub fn merge_with(self, other: StyleListBuilder, when: impl FnOnce() -> bool) -> Self {
        self.push_group(other, Condition::Lazy(Box::new(when)))
    }

    /// Merge the `style` entry of a pass-through attribute bag, verbatim.
    /// The merged value is expected to already be well-formed `prop:value;`
    /// text. A missing bag or a bag without a `style` key is a no-op, never
    /// an error.
    pub fn add_style_from_attributes(self, attributes: Option<&Attributes>) -> Self {
        match attributes.and_then(|attributes| attributes.get(STYLE_KEY)) {
            Some(value) => {
                trace!(style = %value, "merging style from pass-through attributes");
                self.add_value(value.to_string())
            }
            None => self,
        }
    }

    /// Finalize the style list: the accumulated buffer with leading and
    /// trailing whitespace trimmed. An untouched builder builds to `""`.
    pub fn build(self) -> String {
        self.buffer.trim().to_string()
    }

    /// Like [`build`](Self::build), but an empty result becomes `None`, for
    /// hosts that want to omit the attribute entirely rather than emit
    /// `style=""`.
    pub fn build_nonempty(self) -> Option<String> {
        let style = self.build();
        if style.is_empty() {
            None
        } else {
            Some(style)
        }
    }

    fn push(self, prop: impl Display, value: impl Display, when: Condition<'_>) -> Self {
        if when.holds() {
            self.add_value(format!("{prop}:{value};"))
        } else {
            self
        }
    }

    fn push_group(self, group: StyleListBuilder, when: Condition<'_>) -> Self {
        if when.holds() {
            self.add_value(group.build())
        } else {
            self
        }
    }
}

impl fmt::Display for StyleListBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buffer.trim())
    }
}
