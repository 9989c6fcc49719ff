use crate::coords::Rect;
use crate::paint::Color;

use super::{DrawCmd, SortKey, ZIndex};
use super::cmd::RectCmd;

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping.
    pub clip_rect: Option<Rect>,
}

/// One frame's worth of overlay commands.
///
/// Clips pushed with [`DrawList::push_clip`] intersect with their parent, so
/// nested regions only ever shrink. The sorted index buffer is reused between
/// frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Top is the current effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records `cmd` on layer `z` under the current clip.
    pub fn push(&mut self, z: ZIndex, cmd: impl Into<DrawCmd>) {
        let key = SortKey { z, order: self.next_order };
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { key, cmd: cmd.into(), clip_rect: self.clip_stack.last().copied() });
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, RectCmd { rect, color });
    }

    /// Begins a scissor region. Must be balanced with [`DrawList::pop_clip`].
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap yields a zero-area rect; renderers skip those draws.
            Some(&parent) => parent.intersect(rect).unwrap_or_default(),
        };
        self.clip_stack.push(effective);
    }

    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Iterates items in paint order (back-to-front) without cloning.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices.sort_by(|&a, &b| items[a].key.cmp(&items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_at(x: f32) -> Rect {
        Rect::new(x, 0.0, 1.0, 1.0)
    }

    fn xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Rect(r) => Some(r.rect.origin.x),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex(1), rect_at(0.0), Color::WHITE);
        list.push_rect(ZIndex(0), rect_at(1.0), Color::WHITE);
        list.push_rect(ZIndex(1), rect_at(2.0), Color::WHITE);
        list.push_rect(ZIndex(0), rect_at(3.0), Color::WHITE);

        assert_eq!(xs(&mut list), vec![1.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        list.push_rect(ZIndex(0), rect_at(0.0), Color::WHITE);
        list.pop_clip();
        list.push_rect(ZIndex(0), rect_at(1.0), Color::WHITE);
        list.pop_clip();
        list.push_rect(ZIndex(0), rect_at(2.0), Color::WHITE);

        let clips: Vec<_> = list.items().iter().map(|i| i.clip_rect).collect();
        assert_eq!(clips[0], Some(Rect::new(50.0, 50.0, 50.0, 50.0)));
        assert_eq!(clips[1], Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(clips[2], None);
    }

    #[test]
    fn disjoint_clip_is_empty() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(20.0, 20.0, 10.0, 10.0));
        list.push_rect(ZIndex(0), rect_at(0.0), Color::WHITE);
        assert!(list.items()[0].clip_rect.is_some_and(|r| r.is_empty()));
    }

    #[test]
    fn clear_resets_order_and_clips() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_rect(ZIndex(0), rect_at(0.0), Color::WHITE);
        list.clear();
        assert!(list.is_empty());
        list.push_rect(ZIndex(0), rect_at(0.0), Color::WHITE);
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(list.items()[0].clip_rect, None);
    }
}
