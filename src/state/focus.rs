//! Focus targets and the tab-navigation trap around the login card.

use crate::model::Field;

/// An interactive control on the login card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// Username input.
    Username,
    /// Password input.
    Password,
    /// Show/hide control next to the password input.
    VisibilityToggle,
    /// Submit control.
    Submit,
}

impl FocusTarget {
    /// The text field behind this target, if it is an input.
    pub fn field(self) -> Option<Field> {
        match self {
            FocusTarget::Username => Some(Field::Username),
            FocusTarget::Password => Some(Field::Password),
            FocusTarget::VisibilityToggle | FocusTarget::Submit => None,
        }
    }

    /// Whether this target is a text input.
    pub fn is_input(self) -> bool {
        self.field().is_some()
    }
}

impl From<Field> for FocusTarget {
    fn from(field: Field) -> Self {
        match field {
            Field::Username => FocusTarget::Username,
            Field::Password => FocusTarget::Password,
        }
    }
}

/// Direction of a tab-navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    /// Tab.
    Forward,
    /// Shift+Tab.
    Backward,
}

/// Confines Tab / Shift+Tab to the controls of the login card.
///
/// The focusable set is a snapshot taken at construction. If the host later
/// adds or removes controls the trap keeps its original view; that is an
/// accepted limitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap {
    focusables: Vec<FocusTarget>,
}

impl FocusTrap {
    /// Trap over an explicit ordered set.
    pub fn new(focusables: Vec<FocusTarget>) -> Self {
        Self { focusables }
    }

    /// Snapshot of the login card's controls in document order.
    ///
    /// The visibility toggle is only part of the set when the host renders it.
    pub fn for_login_card(show_visibility_toggle: bool) -> Self {
        let mut focusables = vec![FocusTarget::Username, FocusTarget::Password];
        if show_visibility_toggle {
            focusables.push(FocusTarget::VisibilityToggle);
        }
        focusables.push(FocusTarget::Submit);
        Self::new(focusables)
    }

    /// Controls in tab order.
    pub fn focusables(&self) -> &[FocusTarget] {
        &self.focusables
    }

    /// First control.
    pub fn first(&self) -> Option<FocusTarget> {
        self.focusables.first().copied()
    }

    /// Last control.
    pub fn last(&self) -> Option<FocusTarget> {
        self.focusables.last().copied()
    }

    /// Whether `target` is inside the trap.
    pub fn contains(&self, target: FocusTarget) -> bool {
        self.focusables.contains(&target)
    }

    /// Wrap-around at the edges of the set.
    ///
    /// Returns the new target when a tab key must be intercepted: forward
    /// from the last control lands on the first, backward from the first
    /// lands on the last. Returns `None` when default navigation should run,
    /// including whenever focus is outside the trap.
    pub fn intercept(
        &self,
        focused: Option<FocusTarget>,
        direction: TabDirection,
    ) -> Option<FocusTarget> {
        let focused = focused.filter(|f| self.contains(*f))?;
        let (first, last) = (self.first()?, self.last()?);

        match direction {
            TabDirection::Forward if focused == last => Some(first),
            TabDirection::Backward if focused == first => Some(last),
            _ => None,
        }
    }

    /// Default (non-wrapping) navigation one step along the set.
    ///
    /// From outside the trap, Tab enters at the first control and Shift+Tab
    /// at the last. Returns `None` at an edge.
    pub fn step(&self, focused: Option<FocusTarget>, direction: TabDirection) -> Option<FocusTarget> {
        let position = focused.and_then(|f| self.focusables.iter().position(|t| *t == f));

        match (position, direction) {
            (None, TabDirection::Forward) => self.first(),
            (None, TabDirection::Backward) => self.last(),
            (Some(i), TabDirection::Forward) => self.focusables.get(i + 1).copied(),
            (Some(i), TabDirection::Backward) => {
                i.checked_sub(1).and_then(|j| self.focusables.get(j).copied())
            }
        }
    }

    /// Where a tab key moves focus: the trap's wrap if it intercepts,
    /// otherwise default navigation.
    pub fn navigate(
        &self,
        focused: Option<FocusTarget>,
        direction: TabDirection,
    ) -> Option<FocusTarget> {
        self.intercept(focused, direction)
            .or_else(|| self.step(focused, direction))
    }
}
