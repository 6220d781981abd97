#![forbid(unsafe_code)]

//! Configuration records.
//!
//! [`ReorderConfig`] carries the per-container and per-item rules. Every
//! field is optional and has a documented default:
//!
//! | Field | Default when absent |
//! |-------|---------------------|
//! | capacity | [`Capacity::Unbounded`] |
//! | validator | always valid |
//! | fixed | never fixed |
//!
//! [`BoardOptions`] carries host tunables that do not depend on the item type.

use std::fmt;

/// Per-container capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Capacity {
    #[default]
    Unbounded,
    Limit(usize),
}

impl Capacity {
    /// True when a container of `len` items cannot accept one more.
    #[must_use]
    pub const fn is_full(self, len: usize) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Limit(limit) => len >= limit,
        }
    }

    #[must_use]
    pub const fn limit(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Limit(limit) => Some(limit),
        }
    }
}

impl From<usize> for Capacity {
    fn from(limit: usize) -> Self {
        Self::Limit(limit)
    }
}

impl From<Option<usize>> for Capacity {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Self::Unbounded, Self::Limit)
    }
}

/// Predicate re-run over a container's items after each mutation touching it.
pub type Validator<T> = Box<dyn Fn(&[T]) -> bool>;

/// Per-container and per-item movement rules.
pub struct ReorderConfig<T> {
    pub(crate) limits: Vec<Capacity>,
    pub(crate) validators: Vec<Option<Validator<T>>>,
    pub(crate) fixed: Option<Vec<Vec<bool>>>,
}

impl<T> Default for ReorderConfig<T> {
    fn default() -> Self {
        Self {
            limits: Vec::new(),
            validators: Vec::new(),
            fixed: None,
        }
    }
}

impl<T> fmt::Debug for ReorderConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderConfig")
            .field("limits", &self.limits)
            .field(
                "validators",
                &self
                    .validators
                    .iter()
                    .map(Option::is_some)
                    .collect::<Vec<_>>(),
            )
            .field("fixed", &self.fixed)
            .finish()
    }
}

impl<T> ReorderConfig<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-container capacities in container order. Containers past the end
    /// of the list are unbounded.
    #[must_use]
    pub fn with_limits<C: Into<Capacity>>(mut self, limits: impl IntoIterator<Item = C>) -> Self {
        self.limits = limits.into_iter().map(Into::into).collect();
        self
    }

    /// Register the validator for one container.
    #[must_use]
    pub fn with_validator(
        mut self,
        container: usize,
        validator: impl Fn(&[T]) -> bool + 'static,
    ) -> Self {
        if self.validators.len() <= container {
            self.validators.resize_with(container + 1, || None);
        }
        self.validators[container] = Some(Box::new(validator));
        self
    }

    /// Per-item immovability flags, parallel to the backing data.
    #[must_use]
    pub fn with_fixed(mut self, fixed: Vec<Vec<bool>>) -> Self {
        self.fixed = Some(fixed);
        self
    }

    /// Capacity for `container`.
    #[must_use]
    pub fn capacity(&self, container: usize) -> Capacity {
        self.limits.get(container).copied().unwrap_or_default()
    }
}

/// How containers share the board area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Axis {
    /// Containers stacked top to bottom (rows).
    #[default]
    Vertical,
    /// Containers side by side (columns).
    Horizontal,
}

const MAX_ITEM_GAP: u16 = 8;
const MAX_DRAG_THRESHOLD: u16 = 16;

/// Host tunables for the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct BoardOptions {
    /// Container arrangement. Default: [`Axis::Vertical`].
    pub axis: Axis,
    /// Blank columns between items in a row. Default: 1.
    pub item_gap: u16,
    /// Accept `a`/`d`/`w`/`s` as aliases for the arrow keys. Default: true.
    pub letter_keys: bool,
    /// Whether a cancelled touch drag also clears the selection.
    ///
    /// Default: false, so the item stays selected and the drag can be
    /// resumed.
    pub touch_cancel_unselects: bool,
    /// Cells of pointer travel before a press turns into a drag. Default: 1.
    pub drag_threshold: u16,
    /// Label of the submit control. Default: `"Submit"`.
    pub submit_label: String,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            item_gap: 1,
            letter_keys: true,
            touch_cancel_unselects: false,
            drag_threshold: 1,
            submit_label: "Submit".to_string(),
        }
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl BoardOptions {
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_item_gap(mut self, gap: u16) -> Self {
        self.item_gap = gap;
        self
    }

    #[must_use]
    pub fn with_letter_keys(mut self, enabled: bool) -> Self {
        self.letter_keys = enabled;
        self
    }

    #[must_use]
    pub fn with_touch_cancel_unselects(mut self, enabled: bool) -> Self {
        self.touch_cancel_unselects = enabled;
        self
    }

    #[must_use]
    pub fn with_drag_threshold(mut self, cells: u16) -> Self {
        self.drag_threshold = cells;
        self
    }

    #[must_use]
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Load options from environment variables.
    ///
    /// Reads:
    /// - `DRAGSEG_ITEM_GAP`: blank columns between items
    /// - `DRAGSEG_LETTER_KEYS`: "1"/"true" to enable WASD aliases, anything else disables
    /// - `DRAGSEG_TOUCH_CANCEL_UNSELECTS`: "1"/"true" to clear selection on touch cancel
    /// - `DRAGSEG_DRAG_THRESHOLD`: pointer travel in cells before a drag starts
    ///
    /// Values are clamped via [`BoardOptions::validated`].
    #[must_use]
    pub fn from_env() -> Self {
        let mut options = Self::default();

        if let Ok(val) = std::env::var("DRAGSEG_ITEM_GAP")
            && let Ok(gap) = val.parse::<u16>()
        {
            options.item_gap = gap;
        }

        if let Ok(val) = std::env::var("DRAGSEG_LETTER_KEYS") {
            options.letter_keys = parse_flag(&val);
        }

        if let Ok(val) = std::env::var("DRAGSEG_TOUCH_CANCEL_UNSELECTS") {
            options.touch_cancel_unselects = parse_flag(&val);
        }

        if let Ok(val) = std::env::var("DRAGSEG_DRAG_THRESHOLD")
            && let Ok(cells) = val.parse::<u16>()
        {
            options.drag_threshold = cells;
        }

        options.validated()
    }

    /// Clamp values to safe ranges: gap to `0..=8`, drag threshold to `0..=16`.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.item_gap = self.item_gap.min(MAX_ITEM_GAP);
        self.drag_threshold = self.drag_threshold.min(MAX_DRAG_THRESHOLD);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_full_check() {
        assert!(!Capacity::Unbounded.is_full(usize::MAX));
        assert!(!Capacity::Limit(2).is_full(1));
        assert!(Capacity::Limit(2).is_full(2));
        assert!(Capacity::Limit(0).is_full(0));
        assert_eq!(Capacity::from(None), Capacity::Unbounded);
        assert_eq!(Capacity::from(Some(3)).limit(), Some(3));
    }

    #[test]
    fn config_defaults_are_permissive() {
        let config: ReorderConfig<u8> = ReorderConfig::new();
        assert_eq!(config.capacity(0), Capacity::Unbounded);
        assert_eq!(config.capacity(99), Capacity::Unbounded);
        assert!(config.validators.is_empty());
        assert!(config.fixed.is_none());
    }

    #[test]
    fn with_validator_pads_earlier_slots() {
        let config: ReorderConfig<u8> =
            ReorderConfig::new().with_validator(2, |items| !items.is_empty());
        assert_eq!(config.validators.len(), 3);
        assert!(config.validators[0].is_none());
        assert!(config.validators[1].is_none());
        assert!(config.validators[2].as_ref().is_some_and(|v| v(&[1])));
        assert!(format!("{config:?}").contains("[false, false, true]"));
    }

    #[test]
    fn short_limits_leave_rest_unbounded() {
        let config: ReorderConfig<u8> = ReorderConfig::new().with_limits([2usize]);
        assert_eq!(config.capacity(0), Capacity::Limit(2));
        assert_eq!(config.capacity(1), Capacity::Unbounded);
    }

    #[test]
    fn options_defaults() {
        let options = BoardOptions::default();
        assert_eq!(options.axis, Axis::Vertical);
        assert_eq!(options.item_gap, 1);
        assert!(options.letter_keys);
        assert!(!options.touch_cancel_unselects);
        assert_eq!(options.drag_threshold, 1);
        assert_eq!(options.submit_label, "Submit");
    }

    #[test]
    fn options_validated_clamps() {
        let options = BoardOptions::default()
            .with_item_gap(40)
            .with_drag_threshold(100)
            .validated();
        assert_eq!(options.item_gap, 8);
        assert_eq!(options.drag_threshold, 16);
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("yes"));
    }

    #[cfg(feature = "state-persistence")]
    #[test]
    fn options_serde_shape() {
        let options = BoardOptions::default().with_axis(Axis::Horizontal);
        let json = serde_json::to_value(&options).expect("serialize");
        assert_eq!(json["axis"], "Horizontal");
        assert_eq!(json["item_gap"], 1);
        let back: BoardOptions = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, options);
    }
}
