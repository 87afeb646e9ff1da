#![forbid(unsafe_code)]

//! The draw plan handed to the host.
//!
//! A [`DisplayList`] is inert data: the overlay appends items in paint
//! order, the host replays them against its compositor. Tests inspect the
//! same list instead of a framebuffer.

use coachlight_core::geometry::Rect;

use crate::color::Color;
use crate::path::{FillRule, Path};
use crate::text::{FontMetrics, TextAlign};

/// One paintable item.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    /// Fill a path. The mask is one of these with [`FillRule::EvenOdd`].
    Fill {
        path: Path,
        rule: FillRule,
        color: Color,
    },
    /// Draw text laid out inside `rect`.
    Text {
        rect: Rect,
        content: String,
        metrics: FontMetrics,
        color: Color,
        align: TextAlign,
        /// Opaque backing fill behind the text, if any.
        background: Option<Color>,
    },
}

/// Items in paint order (first item is painted first).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayList {
    items: Vec<DisplayItem>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: DisplayItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for DisplayList {
    type Item = DisplayItem;
    type IntoIter = std::vec::IntoIter<DisplayItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayItem, DisplayList};
    use crate::color::Color;
    use crate::path::{FillRule, Path};

    #[test]
    fn list_preserves_paint_order() {
        let mut list = DisplayList::new();
        let mut path = Path::new();
        path.push_rect(coachlight_core::geometry::Rect::new(0.0, 0.0, 1.0, 1.0));
        list.push(DisplayItem::Fill {
            path: path.clone(),
            rule: FillRule::EvenOdd,
            color: Color::BLACK,
        });
        list.push(DisplayItem::Fill {
            path,
            rule: FillRule::NonZero,
            color: Color::WHITE,
        });
        assert_eq!(list.len(), 2);
        assert!(matches!(
            list.items()[0],
            DisplayItem::Fill {
                rule: FillRule::EvenOdd,
                ..
            }
        ));
    }

    #[test]
    fn new_list_is_empty() {
        assert!(DisplayList::new().is_empty());
        assert_eq!(DisplayList::new().len(), 0);
    }
}
