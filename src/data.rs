use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{BoundingBox, ChartAxis, ViewSetup, validate_axis};
use crate::error::ChartResult;
use crate::items::{ChartItem, ChartStyleConfig, DataItem, DeviceScale, ItemKind, ProfileItem};
use crate::render::{PaintSurface, SurfaceScope};

/// Margin added on each side of an axis whose range collapses to one value.
pub const DEGENERATE_RANGE_MARGIN: f64 = 2.5;

/// Stable handle of an item owned by a [`ChartData`].
///
/// Ids are never reused, so a handle kept across `clear_data` simply stops
/// resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Ordered collection of chart items painted as one chart layer.
///
/// Items are painted in insertion order. One profile item may be designated
/// as the height item that terrain-following layers query.
#[derive(Debug, Clone, Default)]
pub struct ChartData {
    items: IndexMap<ItemId, ChartItem>,
    height_item: Option<ItemId>,
    next_id: u64,
    style_config: ChartStyleConfig,
}

impl ChartData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection whose `create_item` styles new items from `config`.
    pub fn with_style_config(config: ChartStyleConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            style_config: config,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn style_config(&self) -> &ChartStyleConfig {
        &self.style_config
    }

    /// Creates an empty item of `kind`, appends it and returns its id.
    pub fn create_item(&mut self, kind: ItemKind) -> ItemId {
        self.add_data_item(ChartItem::new(kind, &self.style_config))
    }

    /// Appends an already built item and takes ownership of it.
    pub fn add_data_item(&mut self, item: impl Into<ChartItem>) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let item = item.into();
        trace!(id = id.raw(), kind = ?item.kind(), "add chart item");
        self.items.insert(id, item);
        id
    }

    /// Item at insertion position `index`, if any.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&ChartItem> {
        self.items.get_index(index).map(|(_, item)| item)
    }

    pub fn item_at_mut(&mut self, index: usize) -> Option<&mut ChartItem> {
        self.items.get_index_mut(index).map(|(_, item)| item)
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&ChartItem> {
        self.items.get(&id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut ChartItem> {
        self.items.get_mut(&id)
    }

    /// Id of the item at insertion position `index`, if any.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.items.get_index(index).map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &ChartItem)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Designates the profile item `id` as the height item.
    ///
    /// Ids that are unknown or that name a non-profile item are rejected and
    /// leave the current designation untouched.
    pub fn set_height_item(&mut self, id: ItemId) -> bool {
        match self.items.get(&id).map(DataItem::kind) {
            Some(ItemKind::Profile) => {
                self.height_item = Some(id);
                true
            }
            Some(kind) => {
                warn!(id = id.raw(), ?kind, "height item must be a profile; ignoring");
                false
            }
            None => {
                warn!(id = id.raw(), "height item is not in this chart; ignoring");
                false
            }
        }
    }

    pub fn clear_height_item(&mut self) {
        self.height_item = None;
    }

    #[must_use]
    pub fn height_item_id(&self) -> Option<ItemId> {
        self.height_item
    }

    #[must_use]
    pub fn height_item(&self) -> Option<&ProfileItem> {
        self.height_item
            .and_then(|id| self.items.get(&id))
            .and_then(ChartItem::as_profile)
    }

    /// Height of the designated profile at `x`; 0 without a height item.
    #[must_use]
    pub fn height_value(&self, x: f64) -> f64 {
        self.height_item()
            .map_or(0.0, |profile| profile.height_value(x))
    }

    /// Drops every item and the height designation.
    pub fn clear_data(&mut self) {
        debug!(count = self.items.len(), "clear chart items");
        self.height_item = None;
        self.items.clear();
    }

    /// Union of all item ranges.
    ///
    /// An axis whose extent rounds to a single value is widened by
    /// [`DEGENERATE_RANGE_MARGIN`] on both sides. An empty collection yields
    /// [`BoundingBox::EMPTY`].
    #[must_use]
    pub fn range(&self) -> BoundingBox {
        if self.items.is_empty() {
            return BoundingBox::EMPTY;
        }

        self.items
            .values()
            .map(DataItem::range)
            .fold(BoundingBox::EMPTY, BoundingBox::merge)
            .padded_if_degenerate(DEGENERATE_RANGE_MARGIN)
    }

    /// Paints every item in insertion order through the view built from the
    /// axes.
    ///
    /// The surface transform and window are restored before returning, also
    /// on failure. A failing item does not stop the remaining items; the
    /// first error is returned.
    pub fn paint<S: PaintSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        x_axis: &impl ChartAxis,
        y_axis: &impl ChartAxis,
    ) -> ChartResult<()> {
        validate_axis(x_axis, "x")?;
        validate_axis(y_axis, "y")?;

        let view = ViewSetup::from_axes(x_axis, y_axis);
        let scale = DeviceScale::from_axes(x_axis, y_axis);
        trace!(items = self.items.len(), ?view, ?scale, "paint chart items");

        let mut scope = SurfaceScope::new(surface);
        scope.set_transform(view.transform);
        scope.set_window(view.window);

        let mut first_error = None;
        for (id, item) in &mut self.items {
            item.set_device_scale(scale);
            if let Err(err) = item.paint(&mut *scope) {
                warn!(id = id.raw(), kind = ?item.kind(), error = %err, "chart item paint failed");
                first_error.get_or_insert(err);
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}
