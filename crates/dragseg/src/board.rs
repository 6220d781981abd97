#![forbid(unsafe_code)]

//! The root board widget.
//!
//! [`ReorderBoard`] ties the pieces together: it owns the engine, the
//! container shells, selection and focus, the placeholder, the input
//! adapters and the optional submit control. Every input modality ends in
//! [`ReorderBoard::move_item`], which is the only path to the engine's move
//! primitive.
//!
//! # Frame cycle
//!
//! 1. [`ReorderBoard::layout`] assigns areas to shells, items, the
//!    placeholder and the submit control, and applies the deferred initial
//!    focus the first time it runs.
//! 2. Rendering draws from those areas.
//! 3. [`ReorderBoard::handle_event`] resolves input against the areas of
//!    the last layout and re-runs layout after anything that moves an item.
//!
//! # Example
//!
//! ```
//! use dragseg::{BoardOptions, Chip, ContainerShell, ReorderBoard, ReorderConfig};
//! use dragseg_core::geometry::Rect;
//! use dragseg_render::Buffer;
//!
//! let mut board = ReorderBoard::new(
//!     |_| ContainerShell::new(),
//!     vec![vec!["a", "b"], vec!["c"]],
//!     |item: &&str| Box::new(Chip::new(*item)),
//!     ReorderConfig::new().with_limits([2usize, 2]),
//!     BoardOptions::default(),
//! )
//! .expect("config matches backing");
//!
//! let mut buf = Buffer::new(20, 6);
//! board.draw(Rect::new(0, 0, 20, 6), &mut buf);
//! assert_eq!(buf.row_text(1), "│[a] [b]           │");
//! ```

use dragseg_core::event::{Event, KeyEvent, MouseEvent, TouchEvent};
use dragseg_core::geometry::{Position, Rect};
use dragseg_render::{Buffer, Style};

use crate::config::{BoardOptions, ReorderConfig};
use crate::constraint::{SlotModel, accepts_drop};
use crate::container::{ContainerMarks, ContainerShell};
use crate::element::{ElementId, ElementMarks, ItemElement, ItemPos, Placement};
use crate::engine::ReorderEngine;
use crate::error::{BoardError, MoveRejection};
use crate::geometry::{container_at, resolve_drop_index};
use crate::input::keyboard::{KeyCommand, KeyPlan, command_for, plan_step};
use crate::input::pointer::{PointerAdapter, PointerIntent};
use crate::input::touch::{TouchAdapter, TouchIntent};
use crate::input::{ElementHit, Hit};
use crate::layout::layout_containers;
use crate::placeholder::{Placeholder, PlaceholderSlot};
use crate::selection::SelectionMachine;
use crate::submit::SubmitButton;
use crate::widget::{ItemWidget, Widget};

/// Whether the board acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Ignored,
    Consumed,
}

impl EventOutcome {
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Reorderable multi-container list widget.
pub struct ReorderBoard<T> {
    engine: ReorderEngine<T>,
    shells: Vec<ContainerShell>,
    selection: SelectionMachine,
    placeholder: PlaceholderSlot,
    pointer: PointerAdapter,
    touch: TouchAdapter,
    options: BoardOptions,
    submit: Option<SubmitButton<T>>,
    area: Rect,
    focus_pending: bool,
}

impl<T> std::fmt::Debug for ReorderBoard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReorderBoard")
            .field("engine", &self.engine)
            .field("selection", &self.selection)
            .field("placeholder", &self.placeholder)
            .field("options", &self.options)
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

fn mark_style(marks: ElementMarks) -> Style {
    let mut style = Style::new();
    if marks.contains(ElementMarks::FIXED) {
        style = style.dim();
    }
    if marks.contains(ElementMarks::SELECTED) {
        style = style.reverse();
    }
    if marks.contains(ElementMarks::FOCUSED) {
        style = style.bold().underline();
    }
    style
}

fn element_hit(element: &ItemElement) -> ElementHit {
    ElementHit {
        id: element.id(),
        fixed: element.marks().contains(ElementMarks::FIXED),
        placement: element.placement(),
    }
}

impl<T> ReorderBoard<T> {
    /// Build a board over `backing`.
    ///
    /// `container_factory` is called once per container with its index and
    /// returns the empty shell items are laid out in. `transform` is called
    /// once per item; visuals are never rebuilt on reorder.
    pub fn new<G, F>(
        mut container_factory: G,
        backing: Vec<Vec<T>>,
        transform: F,
        config: ReorderConfig<T>,
        options: BoardOptions,
    ) -> Result<Self, BoardError>
    where
        G: FnMut(usize) -> ContainerShell,
        F: FnMut(&T) -> Box<dyn ItemWidget>,
    {
        let engine = ReorderEngine::new(backing, transform, config)?;
        let shells = (0..engine.container_count())
            .map(|container| {
                let mut shell = container_factory(container);
                shell
                    .marks
                    .set(ContainerMarks::INVALID, engine.is_invalid(container));
                shell
            })
            .collect();
        Ok(Self {
            engine,
            shells,
            selection: SelectionMachine::new(),
            placeholder: PlaceholderSlot::default(),
            pointer: PointerAdapter::new(),
            touch: TouchAdapter::new(),
            options: options.validated(),
            submit: None,
            area: Rect::default(),
            focus_pending: true,
        })
    }

    /// Append a submit control that hands the current arrangement to
    /// `on_submit`.
    #[must_use]
    pub fn with_submit(mut self, on_submit: impl FnMut(&[Vec<T>]) + 'static) -> Self {
        self.submit = Some(SubmitButton::new(
            self.options.submit_label.clone(),
            Box::new(on_submit),
        ));
        self
    }

    // --- accessors ---

    #[must_use]
    pub fn engine(&self) -> &ReorderEngine<T> {
        &self.engine
    }

    #[must_use]
    pub fn backing(&self) -> &[Vec<T>] {
        self.engine.backing()
    }

    #[must_use]
    pub fn into_backing(self) -> Vec<Vec<T>> {
        self.engine.into_backing()
    }

    #[must_use]
    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    #[must_use]
    pub fn shells(&self) -> &[ContainerShell] {
        &self.shells
    }

    /// Current position of the selected item.
    #[must_use]
    pub fn selection(&self) -> Option<ItemPos> {
        self.engine.position_of(self.selection.selected()?)
    }

    /// Current position of the focused item.
    #[must_use]
    pub fn focused(&self) -> Option<ItemPos> {
        self.engine.position_of(self.selection.focused()?)
    }

    #[must_use]
    pub fn is_invalid(&self, container: usize) -> bool {
        self.engine.is_invalid(container)
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.get()
    }

    #[must_use]
    pub fn position_of(&self, id: ElementId) -> Option<ItemPos> {
        self.engine.position_of(id)
    }

    #[must_use]
    pub fn element_at(&self, pos: ItemPos) -> Option<&ItemElement> {
        self.engine.element(pos)
    }

    #[must_use]
    pub fn submit_button(&self) -> Option<&SubmitButton<T>> {
        self.submit.as_ref()
    }

    /// Whether a pointer or touch drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.dragging().is_some() || self.touch.active().is_some()
    }

    // --- commands ---

    /// Invoke the submit callback with the current arrangement. Returns
    /// false when the board has no submit control.
    pub fn submit(&mut self) -> bool {
        match self.submit.as_mut() {
            Some(button) => {
                button.fire(self.engine.backing());
                true
            }
            None => false,
        }
    }

    /// Select the item at `pos`. Fixed items cannot be selected.
    pub fn select(&mut self, pos: ItemPos) -> bool {
        let Some(element) = self.engine.element(pos) else {
            return false;
        };
        if self.engine.is_fixed(pos) {
            return false;
        }
        let id = element.id();
        self.selection.select(id);
        self.selection.sync_marks(&mut self.engine);
        true
    }

    pub fn unselect(&mut self) -> Option<ItemPos> {
        let id = self.selection.unselect()?;
        self.selection.sync_marks(&mut self.engine);
        self.engine.position_of(id)
    }

    /// Move focus to the item at `pos` without changing the selection.
    pub fn focus(&mut self, pos: ItemPos) -> bool {
        let Some(id) = self.engine.element(pos).map(ItemElement::id) else {
            return false;
        };
        self.selection.focus(id);
        self.focus_pending = false;
        self.selection.sync_marks(&mut self.engine);
        true
    }

    /// Move the item at `from` to insertion point `to` (post-removal index).
    ///
    /// Rejected moves leave the board exactly as it was.
    pub fn move_item(&mut self, from: ItemPos, to: ItemPos) -> Result<ItemPos, MoveRejection> {
        let moved = self.engine.move_item(from, to)?;
        self.sync_invalid_marks();
        self.relayout();
        Ok(moved)
    }

    // --- layout & drawing ---

    /// Assign areas for everything on the board.
    pub fn layout(&mut self, area: Rect) {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "board.layout",
            containers = self.shells.len(),
            items = self.engine.total_items()
        );
        #[cfg(feature = "tracing")]
        let _guard = span.enter();

        self.area = area;
        let mut containers_area = area;
        if let Some(button) = self.submit.as_mut() {
            if area.height > 0 {
                let size = button.size();
                button.area = Rect::new(area.x, area.bottom() - 1, size.width.min(area.width), 1);
                containers_area.height -= 1;
            } else {
                button.area = Rect::default();
            }
        }
        layout_containers(
            &mut self.engine,
            &mut self.shells,
            &mut self.placeholder,
            containers_area,
            self.options.axis,
            self.options.item_gap,
        );

        if self.focus_pending {
            self.focus_pending = false;
            if self.selection.focused().is_none()
                && let Some(first) = (0..self.engine.container_count())
                    .find_map(|c| self.engine.elements(c).first().map(ItemElement::id))
            {
                self.selection.focus(first);
            }
        }
        self.selection.sync_marks(&mut self.engine);
    }

    /// Layout then render.
    pub fn draw(&mut self, area: Rect, buf: &mut Buffer) {
        self.layout(area);
        self.render(area, buf);
    }

    fn relayout(&mut self) {
        self.layout(self.area);
    }

    fn sync_invalid_marks(&mut self) {
        for (container, shell) in self.shells.iter_mut().enumerate() {
            shell
                .marks
                .set(ContainerMarks::INVALID, self.engine.is_invalid(container));
        }
    }

    fn shell_rects(&self) -> Vec<Rect> {
        self.shells.iter().map(ContainerShell::area).collect()
    }

    /// What lies under `point`. Floating elements are on top.
    fn hit_test(&self, point: Position) -> Hit {
        let mut flow = None;
        let mut floating: Option<(u16, ElementHit)> = None;
        for container in 0..self.engine.container_count() {
            for element in self.engine.elements(container) {
                if !element.area().contains_pos(point) {
                    continue;
                }
                match element.placement() {
                    Placement::Floating { z, .. } => {
                        if floating.is_none_or(|(top, _)| z >= top) {
                            floating = Some((z, element_hit(element)));
                        }
                    }
                    Placement::Flow => {
                        flow.get_or_insert_with(|| element_hit(element));
                    }
                }
            }
        }
        Hit {
            element: floating.map(|(_, hit)| hit).or(flow),
            submit: self
                .submit
                .as_ref()
                .is_some_and(|button| button.contains(point)),
        }
    }

    // --- input ---

    /// Dispatch one input event to the matching adapter.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        let outcome = match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Touch(touch) => self.handle_touch(touch),
            Event::Focus(false) => self.cancel_gestures(),
            Event::Focus(true) | Event::Resize { .. } => EventOutcome::Ignored,
        };
        self.selection.sync_marks(&mut self.engine);
        outcome
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventOutcome {
        let Some(command) = command_for(key, self.options.letter_keys) else {
            return EventOutcome::Ignored;
        };
        let Some(focused) = self.selection.focused() else {
            return EventOutcome::Ignored;
        };
        let Some(pos) = self.engine.position_of(focused) else {
            return EventOutcome::Ignored;
        };

        match command {
            KeyCommand::ToggleSelect => {
                if self.engine.is_fixed(pos) {
                    return EventOutcome::Ignored;
                }
                if self.selection.is_selected(focused) {
                    self.selection.unselect();
                } else {
                    self.selection.select(focused);
                }
            }
            KeyCommand::Step(direction) => {
                let moving = self.selection.is_selected(focused);
                match plan_step(&self.engine, pos, direction, moving) {
                    KeyPlan::Focus(target) => {
                        if let Some(id) = self.engine.element(target).map(ItemElement::id) {
                            self.selection.focus(id);
                        }
                    }
                    KeyPlan::Move { from, to } => {
                        if self.move_item(from, to).is_ok() {
                            self.selection.select(focused);
                        }
                    }
                    KeyPlan::Stay => {}
                }
            }
        }
        EventOutcome::Consumed
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventOutcome {
        let point = mouse.position();
        let hit = self.hit_test(point);
        match self
            .pointer
            .on_mouse(mouse, hit, self.options.drag_threshold)
        {
            PointerIntent::Ignore => EventOutcome::Ignored,
            PointerIntent::Press { hit } => {
                let cleared = self.selection.on_press(hit);
                if cleared.is_some() || self.area.contains_pos(point) {
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
            PointerIntent::BeginDrag { element, at } => {
                self.selection.select(element);
                self.update_drop_feedback(element, Some(at));
                EventOutcome::Consumed
            }
            PointerIntent::Hover { element, at } => {
                self.update_drop_feedback(element, Some(at));
                EventOutcome::Consumed
            }
            PointerIntent::Drop { element, at } => {
                self.update_drop_feedback(element, None);
                self.drop_at(element, at);
                self.selection.unselect();
                EventOutcome::Consumed
            }
            PointerIntent::Click { element } => {
                self.selection.select(element);
                EventOutcome::Consumed
            }
            PointerIntent::Submit => {
                self.submit();
                EventOutcome::Consumed
            }
        }
    }

    fn handle_touch(&mut self, touch: &TouchEvent) -> EventOutcome {
        let point = touch.primary().map(|p| p.position());
        let hit = point.map(|p| self.hit_test(p)).unwrap_or_default();
        match self.touch.on_touch(touch, hit) {
            TouchIntent::Ignore => EventOutcome::Ignored,
            TouchIntent::Tap { hit } => {
                let cleared = self.selection.on_press(hit);
                if cleared.is_some() || point.is_some_and(|p| self.area.contains_pos(p)) {
                    EventOutcome::Consumed
                } else {
                    EventOutcome::Ignored
                }
            }
            TouchIntent::Start { element, hit } => {
                self.selection.on_press(hit);
                self.selection.select(element);
                EventOutcome::Consumed
            }
            TouchIntent::Move { element, at, first } => {
                if first && let Some(dragged) = self.engine.element_by_id(element)
                {
                    self.placeholder.insert_after(dragged);
                }
                if let Some(dragged) = self.engine.element_by_id_mut(element) {
                    dragged.placement = Placement::Floating {
                        anchor: at,
                        z: Placement::DRAG_Z,
                    };
                }
                self.update_drop_feedback(element, Some(at));
                self.relayout();
                EventOutcome::Consumed
            }
            TouchIntent::End {
                element,
                original,
                at,
            } => {
                self.restore_touch(element, original);
                if let Some(at) = at {
                    self.drop_at(element, at);
                    self.selection.unselect();
                }
                EventOutcome::Consumed
            }
            TouchIntent::Cancel { element, original } => {
                self.cancel_touch(element, original);
                EventOutcome::Consumed
            }
        }
    }

    fn cancel_gestures(&mut self) -> EventOutcome {
        let mut outcome = EventOutcome::Ignored;
        if let Some(element) = self.pointer.cancel() {
            self.update_drop_feedback(element, None);
            outcome = EventOutcome::Consumed;
        }
        if let TouchIntent::Cancel { element, original } = self.touch.cancel() {
            self.cancel_touch(element, original);
            outcome = EventOutcome::Consumed;
        }
        outcome
    }

    fn cancel_touch(&mut self, element: ElementId, original: Placement) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "touch.cancel",
            element = element.0,
            unselect = self.options.touch_cancel_unselects
        );
        self.restore_touch(element, original);
        if self.options.touch_cancel_unselects {
            self.selection.unselect();
        }
    }

    /// Put a touch-dragged element back in place and drop its placeholder.
    fn restore_touch(&mut self, element: ElementId, original: Placement) {
        if let Some(dragged) = self.engine.element_by_id_mut(element) {
            dragged.placement = original;
        }
        self.placeholder.remove();
        self.update_drop_feedback(element, None);
        self.relayout();
    }

    /// Resolve a drop of `element` at `at` and move it there.
    fn drop_at(&mut self, element: ElementId, at: Position) -> Option<ItemPos> {
        let source = self.engine.position_of(element)?;
        let destination = container_at(&self.shell_rects(), at)?;
        let items: Vec<Rect> = self
            .engine
            .elements(destination)
            .iter()
            .map(ItemElement::area)
            .collect();
        let index = resolve_drop_index(&items, at, source, destination);
        self.move_item(source, ItemPos::new(destination, index)).ok()
    }

    /// Mark the container under `at` as the drop target, red when it would
    /// refuse the dragged element. `None` clears all drop marks.
    fn update_drop_feedback(&mut self, element: ElementId, at: Option<Position>) {
        let target = at.and_then(|at| container_at(&self.shell_rects(), at));
        let source = self.engine.position_of(element);
        for (container, shell) in self.shells.iter_mut().enumerate() {
            let is_target = target == Some(container);
            let rejected =
                is_target && source.is_none_or(|src| !accepts_drop(&self.engine, src, container));
            shell.marks.set(ContainerMarks::DROP_TARGET, is_target);
            shell.marks.set(ContainerMarks::DROP_REJECTED, rejected);
        }
    }
}

impl<T> Widget for ReorderBoard<T> {
    /// Draw from the areas assigned by the last [`ReorderBoard::layout`].
    fn render(&self, _area: Rect, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "board.render",
            containers = self.shells.len(),
            items = self.engine.total_items()
        );
        #[cfg(feature = "tracing")]
        let _guard = span.enter();

        for shell in &self.shells {
            shell.render(shell.area(), buf);
        }

        let mut floating: Vec<(u16, &ItemElement)> = Vec::new();
        for container in 0..self.engine.container_count() {
            for element in self.engine.elements(container) {
                if let Placement::Floating { z, .. } = element.placement() {
                    floating.push((z, element));
                    continue;
                }
                render_element(element, buf);
            }
        }

        if let Some(placeholder) = self.placeholder.get()
            && !placeholder.area().is_empty()
        {
            placeholder.render(placeholder.area(), buf);
        }

        floating.sort_by_key(|(z, _)| *z);
        for (_, element) in floating {
            render_element(element, buf);
        }

        if let Some(button) = &self.submit {
            button.render(button.area(), buf);
        }
    }
}

fn render_element(element: &ItemElement, buf: &mut Buffer) {
    let area = element.area();
    if area.is_empty() {
        return;
    }
    element.visual().render(area, buf);
    if !element.marks().is_empty() {
        buf.set_style_area(area, mark_style(element.marks()));
    }
}
