//! # Navigation-chrome override policy.
//!
//! [`OverridePolicy`] selects which navigation-chrome properties propagate
//! from an embedded view up to its container: the leading actions, the title
//! (together with any custom title surface), and the trailing actions.
//!
//! The policy is a plain set over [`OverrideField`] flags. It is read once,
//! at the moment a terminal view is embedded; later changes to the embedded
//! view's own chrome are not propagated.
//!
//! ## Example
//! ```rust
//! use asyncview::{OverrideField, OverridePolicy};
//!
//! let policy = OverridePolicy::TITLE | OverridePolicy::RIGHT_ACTIONS;
//! assert!(policy.contains(OverrideField::Title));
//! assert!(policy.contains(OverrideField::RightActions));
//! assert!(!policy.contains(OverrideField::LeftActions));
//!
//! // Or built as a set of flags:
//! let same: OverridePolicy = [OverrideField::Title, OverrideField::RightActions]
//!     .into_iter()
//!     .collect();
//! assert_eq!(policy, same);
//! ```

use std::ops::{BitOr, BitOrAssign};

use crate::views::NavigationItem;

/// A single navigation-chrome property that can be propagated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverrideField {
    /// The leading-edge action list.
    LeftActions,
    /// The title and the custom title surface.
    Title,
    /// The trailing-edge action list.
    RightActions,
}

/// Set of [`OverrideField`] flags controlling chrome propagation.
///
/// The default policy is empty: nothing propagates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverridePolicy {
    left_actions: bool,
    title: bool,
    right_actions: bool,
}

impl OverridePolicy {
    /// Propagate only the leading-edge actions.
    pub const LEFT_ACTIONS: Self = Self {
        left_actions: true,
        title: false,
        right_actions: false,
    };

    /// Propagate only the title (and custom title surface).
    pub const TITLE: Self = Self {
        left_actions: false,
        title: true,
        right_actions: false,
    };

    /// Propagate only the trailing-edge actions.
    pub const RIGHT_ACTIONS: Self = Self {
        left_actions: false,
        title: false,
        right_actions: true,
    };

    /// Propagate both action lists but not the title.
    pub const BAR_ACTIONS: Self = Self {
        left_actions: true,
        title: false,
        right_actions: true,
    };

    /// Propagate everything.
    pub const ALL: Self = Self {
        left_actions: true,
        title: true,
        right_actions: true,
    };

    /// Returns the empty policy (nothing propagates).
    pub const fn empty() -> Self {
        Self {
            left_actions: false,
            title: false,
            right_actions: false,
        }
    }

    /// True if no field is selected.
    pub const fn is_empty(self) -> bool {
        !self.left_actions && !self.title && !self.right_actions
    }

    /// True if the given field is selected.
    pub const fn contains(self, field: OverrideField) -> bool {
        match field {
            OverrideField::LeftActions => self.left_actions,
            OverrideField::Title => self.title,
            OverrideField::RightActions => self.right_actions,
        }
    }

    /// Returns this policy with the given field selected.
    #[must_use]
    pub const fn with(mut self, field: OverrideField) -> Self {
        match field {
            OverrideField::LeftActions => self.left_actions = true,
            OverrideField::Title => self.title = true,
            OverrideField::RightActions => self.right_actions = true,
        }
        self
    }

    /// Copies the selected fields from `source` to `target`.
    ///
    /// Unselected fields of `target` are left untouched. Selected fields are
    /// assigned, including empty ones: a selected title that is unset on
    /// `source` clears the title on `target`.
    pub fn apply(self, target: &NavigationItem, source: &NavigationItem) {
        if self.left_actions {
            target.set_left_actions(source.left_actions());
        }
        if self.title {
            match source.title() {
                Some(title) => target.set_title(title),
                None => target.clear_title(),
            }
            target.set_title_view(source.title_view());
        }
        if self.right_actions {
            target.set_right_actions(source.right_actions());
        }
    }
}

impl BitOr for OverridePolicy {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            left_actions: self.left_actions || rhs.left_actions,
            title: self.title || rhs.title,
            right_actions: self.right_actions || rhs.right_actions,
        }
    }
}

impl BitOrAssign for OverridePolicy {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl From<OverrideField> for OverridePolicy {
    fn from(field: OverrideField) -> Self {
        Self::empty().with(field)
    }
}

impl FromIterator<OverrideField> for OverridePolicy {
    fn from_iter<I: IntoIterator<Item = OverrideField>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |policy, field| policy.with(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{Action, Surface};

    fn source_item() -> NavigationItem {
        let item = NavigationItem::new();
        item.set_title("T");
        item.set_title_view(Some(Surface::new()));
        item.set_left_actions(vec![Action::new("A")]);
        item.set_right_actions(vec![Action::new("B")]);
        item
    }

    #[test]
    fn test_default_is_empty() {
        let policy = OverridePolicy::default();
        assert!(policy.is_empty());
        assert!(!policy.contains(OverrideField::LeftActions));
        assert!(!policy.contains(OverrideField::Title));
        assert!(!policy.contains(OverrideField::RightActions));
    }

    #[test]
    fn test_union_composes_fields() {
        let policy = OverridePolicy::LEFT_ACTIONS | OverridePolicy::TITLE;
        assert!(policy.contains(OverrideField::LeftActions));
        assert!(policy.contains(OverrideField::Title));
        assert!(!policy.contains(OverrideField::RightActions));
    }

    #[test]
    fn test_bar_actions_selects_both_edges() {
        let policy = OverridePolicy::BAR_ACTIONS;
        assert!(policy.contains(OverrideField::LeftActions));
        assert!(policy.contains(OverrideField::RightActions));
        assert!(!policy.contains(OverrideField::Title));
        assert_eq!(
            policy,
            OverridePolicy::LEFT_ACTIONS | OverridePolicy::RIGHT_ACTIONS
        );
    }

    #[test]
    fn test_all_selects_everything() {
        let policy = OverridePolicy::ALL;
        assert!(policy.contains(OverrideField::LeftActions));
        assert!(policy.contains(OverrideField::Title));
        assert!(policy.contains(OverrideField::RightActions));
    }

    #[test]
    fn test_from_iterator() {
        let policy: OverridePolicy =
            [OverrideField::Title, OverrideField::LeftActions].into_iter().collect();
        assert_eq!(policy, OverridePolicy::LEFT_ACTIONS | OverridePolicy::TITLE);
    }

    #[test]
    fn test_apply_empty_copies_nothing() {
        let target = NavigationItem::new();
        OverridePolicy::empty().apply(&target, &source_item());
        assert!(target.title().is_none());
        assert!(target.left_actions().is_empty());
        assert!(target.right_actions().is_empty());
    }

    #[test]
    fn test_apply_title_only() {
        let target = NavigationItem::new();
        OverridePolicy::TITLE.apply(&target, &source_item());
        assert_eq!(target.title().as_deref(), Some("T"));
        assert!(target.title_view().is_some());
        assert!(target.left_actions().is_empty());
        assert!(target.right_actions().is_empty());
    }

    #[test]
    fn test_apply_all_copies_everything() {
        let target = NavigationItem::new();
        let source = source_item();
        OverridePolicy::ALL.apply(&target, &source);
        assert_eq!(target.title().as_deref(), Some("T"));
        assert_eq!(target.left_actions(), source.left_actions());
        assert_eq!(target.right_actions(), source.right_actions());
    }

    #[test]
    fn test_apply_selected_unset_title_clears_target() {
        let target = NavigationItem::new();
        target.set_title("old");
        OverridePolicy::TITLE.apply(&target, &NavigationItem::new());
        assert!(target.title().is_none());
    }
}
