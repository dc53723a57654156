//! Stacking direction for notification views.

/// Screen edge new notification views stack toward inside the host window.
///
/// Owned and recomputed by the position provider; applied to the host window
/// whenever a new notification is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EjectDirection {
	/// New views push the stack upward.
	ToTop,
	/// New views push the stack downward (default).
	#[default]
	ToBottom,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_stacks_downward() {
		assert_eq!(EjectDirection::default(), EjectDirection::ToBottom);
	}
}
