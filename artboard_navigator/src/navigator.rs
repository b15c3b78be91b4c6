// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use tracing::debug;

use artboard_event_state::frame::FrameScheduler;
use artboard_event_state::inertia::{InertiaSimulator, InertiaStep};
use artboard_event_state::session::GestureSession;
use artboard_view::{ArtboardTransform, ListenerId, ViewportController, ZoomPreset};

use crate::config::NavigatorConfig;
use crate::error::NavigatorError;
use crate::input::{Key, Modifiers, MouseButton, WheelInput};
use crate::lifecycle::{ListenerHost, Subscriptions};
use crate::mapper::{InputMapper, NavAction};
use crate::renderer::SceneRenderer;
use crate::touch::{TouchContext, should_pan_viewport};

/// Owns the viewport, the inertia simulator and the input state, and routes
/// every input and programmatic request through them.
///
/// Only one writer of the pan offset is active at a time: every programmatic
/// pan or zoom, and every new gesture, cancels a running inertia run before
/// touching the viewport. A frame from the cancelled run is then stale and
/// moves nothing.
///
/// Input handlers return `true` when the event was consumed, so the host can
/// suppress its default handling (page scroll, browser zoom).
#[derive(Debug)]
pub struct Navigator<S: FrameScheduler, R: SceneRenderer> {
    config: NavigatorConfig,
    view: ViewportController,
    inertia: InertiaSimulator<S>,
    mapper: InputMapper,
    touch: Option<GestureSession>,
    renderer: R,
}

impl<S: FrameScheduler, R: SceneRenderer> Navigator<S, R> {
    /// Creates a navigator for an artboard shown in a viewport.
    ///
    /// Fails only if the inertia configuration could never come to rest.
    pub fn new(
        config: NavigatorConfig,
        viewport_size: Size,
        artboard_size: Size,
        scheduler: S,
        renderer: R,
    ) -> Result<Self, NavigatorError> {
        let inertia = InertiaSimulator::new(config.inertia, scheduler)?;
        Ok(Self {
            config,
            view: ViewportController::with_config(config.viewport, viewport_size, artboard_size),
            inertia,
            mapper: InputMapper::new(config.chrome_offset),
            touch: None,
            renderer,
        })
    }

    /// Configuration in effect.
    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// The viewport model, for reading state and converting coordinates.
    #[must_use]
    pub fn view(&self) -> &ViewportController {
        &self.view
    }

    /// Current derived transform.
    #[must_use]
    pub fn transform(&self) -> ArtboardTransform {
        self.view.transform()
    }

    /// The inertia simulator.
    #[must_use]
    pub fn inertia(&self) -> &InertiaSimulator<S> {
        &self.inertia
    }

    /// The frame scheduler, for hosts that pump frames themselves.
    pub fn scheduler_mut(&mut self) -> &mut S {
        self.inertia.scheduler_mut()
    }

    /// The scene renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the scene renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Registers a callback run after every viewport change.
    pub fn subscribe(&mut self, listener: impl FnMut(&ArtboardTransform) + 'static) -> ListenerId {
        self.view.subscribe(listener)
    }

    /// Removes a callback registered with [`Navigator::subscribe`].
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.view.unsubscribe(id)
    }

    /// Whether space is held (show a grab cursor).
    #[must_use]
    pub fn is_pan_ready(&self) -> bool {
        self.mapper.is_pan_ready()
    }

    /// Whether a drag-pan or a viewport-panning touch gesture is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.mapper.is_dragging() || self.touch.is_some_and(|s| s.pans_viewport())
    }

    /// Changes the finger-pan priority preference.
    pub fn set_finger_pan_priority(&mut self, enabled: bool) {
        self.config.finger_pan_priority = enabled;
    }

    /// Changes the chrome offset subtracted from pointer positions.
    pub fn set_chrome_offset(&mut self, chrome_offset: Vec2) {
        self.config.chrome_offset = chrome_offset;
        self.mapper.set_chrome_offset(chrome_offset);
    }

    // --- Programmatic operations -------------------------------------------

    /// Pans by `delta` viewport pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.inertia.cancel();
        self.view.pan(delta);
    }

    /// Sets the zoom, keeping `anchor` (viewport-local) fixed.
    pub fn zoom_to(&mut self, zoom: f64, anchor: Option<Point>) {
        self.inertia.cancel();
        self.view.zoom_to(zoom, anchor);
    }

    /// Zooms in one step about the viewport center.
    pub fn zoom_in(&mut self) {
        self.inertia.cancel();
        self.view.zoom_in();
    }

    /// Zooms out one step about the viewport center.
    pub fn zoom_out(&mut self) {
        self.inertia.cancel();
        self.view.zoom_out();
    }

    /// Zooms to a preset.
    pub fn zoom_to_preset(&mut self, preset: ZoomPreset) {
        self.inertia.cancel();
        self.view.zoom_to_preset(preset);
    }

    /// Returns to 100 % and centers the artboard.
    pub fn reset_zoom(&mut self) {
        self.inertia.cancel();
        self.view.reset_zoom();
    }

    /// Fits the whole artboard, never enlarging past 100 %.
    pub fn fit_to_viewport(&mut self) {
        self.inertia.cancel();
        self.view.fit_to_viewport();
    }

    /// Fits the artboard width.
    pub fn fit_to_width(&mut self) {
        self.inertia.cancel();
        self.view.fit_to_width();
    }

    /// Centers the artboard at the current zoom.
    pub fn center_artboard(&mut self) {
        self.inertia.cancel();
        self.view.center_artboard();
    }

    /// Zooms to fit `bounds` (artboard space). Returns `false` for bounds
    /// without area.
    pub fn zoom_to_selection_bounds(&mut self, bounds: Rect) -> bool {
        self.inertia.cancel();
        self.view.zoom_to_selection_bounds(bounds)
    }

    /// Zooms to the renderer's active selection. Returns `false` when
    /// nothing is selected.
    pub fn zoom_to_selection(&mut self) -> bool {
        let Some(bounds) = self.renderer.active_selection_bounds() else {
            return false;
        };
        self.zoom_to_selection_bounds(bounds)
    }

    /// Tracks a viewport resize. Zoom is kept and the pan re-clamped; a
    /// running inertia run continues against the new bounds.
    pub fn resize(&mut self, viewport_size: Size) {
        self.view.resize(viewport_size);
    }

    /// Tracks an artboard size change.
    pub fn set_artboard_size(&mut self, artboard_size: Size) {
        self.view.set_artboard_size(artboard_size);
    }

    // --- Mouse, wheel and keyboard -----------------------------------------

    /// Handles a wheel event.
    pub fn on_wheel(&mut self, input: &WheelInput) -> bool {
        let action = self.mapper.wheel(input);
        self.dispatch(action)
    }

    /// Handles a button press at a client position.
    pub fn on_mouse_down(&mut self, button: MouseButton, client: Point) -> bool {
        let action = self.mapper.mouse_down(button, client);
        self.dispatch(action)
    }

    /// Handles a pointer move at a client position.
    pub fn on_mouse_move(&mut self, client: Point) -> bool {
        let action = self.mapper.mouse_move(client);
        self.dispatch(action)
    }

    /// Handles a button release.
    pub fn on_mouse_up(&mut self, button: MouseButton) -> bool {
        let action = self.mapper.mouse_up(button);
        self.dispatch(action)
    }

    /// Handles a key press. Space counts as handled so the host does not
    /// scroll the page while it arms drag-pan.
    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> bool {
        let action = self.mapper.key_down(key, modifiers);
        self.dispatch(action) || key == Key::Space
    }

    /// Handles a key release.
    pub fn on_key_up(&mut self, key: Key) -> bool {
        let action = self.mapper.key_up(key);
        self.dispatch(action)
    }

    /// Applies one navigation action.
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::PanBy(delta) => self.pan(delta),
            NavAction::ZoomAbout { factor, anchor } => {
                self.inertia.cancel();
                self.view.zoom_by(factor, Some(anchor));
                debug!(factor, zoom = self.view.zoom(), "wheel zoom applied");
            }
            NavAction::BeginDragPan => {
                self.inertia.cancel();
                if self.touch.take().is_some() {
                    debug!("touch pan session superseded by drag-pan");
                }
                self.renderer.set_selection_mode_enabled(false);
            }
            NavAction::EndDragPan { velocity } => {
                if !self.is_panning() {
                    self.renderer.set_selection_mode_enabled(true);
                }
                if self.config.mouse_inertia {
                    self.inertia.start(velocity);
                }
            }
            NavAction::ZoomIn => self.zoom_in(),
            NavAction::ZoomOut => self.zoom_out(),
            NavAction::FitToViewport => self.fit_to_viewport(),
            NavAction::ActualSize => self.reset_zoom(),
        }
    }

    fn dispatch(&mut self, action: Option<NavAction>) -> bool {
        let Some(action) = action else {
            return false;
        };
        self.apply(action);
        true
    }

    // --- Gesture recognizer callbacks --------------------------------------

    /// A touch or pen pan began. Returns whether it will move the viewport.
    ///
    /// The new session replaces any earlier touch session and any mouse
    /// drag-pan; neither hands its velocity to inertia.
    pub fn on_pan_start(&mut self, ctx: &TouchContext) -> bool {
        let was_panning = self.is_panning();
        self.inertia.cancel();
        self.mapper.drop_drag();
        let pans = should_pan_viewport(self.config.finger_pan_priority, ctx);
        self.touch = Some(GestureSession::touch(pans));
        self.sync_selection_mode(was_panning);
        debug!(
            touches = ctx.touch_count,
            stylus = ctx.is_stylus,
            pans,
            "touch pan session started"
        );
        pans
    }

    /// The touch pan moved by `delta`. Returns `false` when the gesture
    /// belongs to object manipulation.
    pub fn on_pan(&mut self, delta: Vec2) -> bool {
        let Some(session) = self.touch.as_mut() else {
            return false;
        };
        if !session.pans_viewport() {
            return false;
        }
        session.record_delta(delta);
        self.view.pan(delta);
        true
    }

    /// The touch pan ended. A viewport pan hands its last delta to inertia.
    pub fn on_pan_end(&mut self) -> bool {
        let was_panning = self.is_panning();
        let Some(session) = self.touch.take() else {
            return false;
        };
        let pans = session.pans_viewport();
        let velocity = session.end();
        self.sync_selection_mode(was_panning);
        if pans {
            self.inertia.start(velocity);
        }
        debug!(pans, vx = velocity.x, vy = velocity.y, "touch pan session ended");
        pans
    }

    /// Pinch zoom by `scale` about a client-space center. A scale that
    /// overflows or collapses to zero saturates at the zoom limits; NaN and
    /// negative scales are rejected.
    pub fn on_pinch_zoom(&mut self, scale: f64, center: Point) -> bool {
        if scale.is_nan() || scale < 0.0 {
            return false;
        }
        self.inertia.cancel();
        let anchor = self.mapper.to_viewport(center);
        self.view.zoom_by(scale, Some(anchor));
        debug!(scale, zoom = self.view.zoom(), "pinch zoom applied");
        true
    }

    /// Double tap fits the artboard.
    pub fn on_double_tap(&mut self) -> bool {
        self.fit_to_viewport();
        true
    }

    /// Long press is left to the host (context menu); always `false`.
    pub fn on_long_press(&mut self, _client: Point) -> bool {
        false
    }

    /// Toggles selection mode when the navigator starts or stops panning.
    fn sync_selection_mode(&mut self, was_panning: bool) {
        let panning = self.is_panning();
        if panning != was_panning {
            self.renderer.set_selection_mode_enabled(!panning);
        }
    }

    // --- Frames and lifecycle ----------------------------------------------

    /// Delivers an animation frame. Returns `true` if the viewport moved.
    pub fn on_animation_frame(&mut self, frame: S::Handle) -> bool {
        match self.inertia.step(frame) {
            InertiaStep::Pan(delta) => {
                self.view.pan(delta);
                true
            }
            InertiaStep::Finished | InertiaStep::Stale => false,
        }
    }

    /// Installs the window-level listeners. Pass the result to
    /// [`Navigator::teardown`] exactly once.
    pub fn start<H: ListenerHost>(&mut self, host: &mut H) -> Subscriptions<H::Token> {
        Subscriptions::install(host)
    }

    /// Removes the window-level listeners and stops everything in flight:
    /// inertia, drag and touch sessions. Selection mode is re-enabled.
    pub fn teardown<H: ListenerHost>(&mut self, subscriptions: Subscriptions<H::Token>, host: &mut H) {
        subscriptions.dispose(host);
        self.inertia.cancel();
        self.mapper.cancel_drag();
        self.touch = None;
        self.renderer.set_selection_mode_enabled(true);
        debug!("navigator torn down");
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::{Point, Rect, Size, Vec2};

    use artboard_event_state::frame::ManualScheduler;

    use super::Navigator;
    use crate::config::NavigatorConfig;
    use crate::input::{Key, Modifiers, MouseButton, WheelInput};
    use crate::renderer::SceneRenderer;
    use crate::touch::TouchContext;

    #[derive(Debug)]
    struct Scene {
        selection: Option<Rect>,
        selection_mode: bool,
    }

    impl Scene {
        fn new(selection: Option<Rect>) -> Self {
            Self {
                selection,
                selection_mode: true,
            }
        }
    }

    impl SceneRenderer for Scene {
        fn active_selection_bounds(&self) -> Option<Rect> {
            self.selection
        }

        fn set_selection_mode_enabled(&mut self, enabled: bool) {
            self.selection_mode = enabled;
        }
    }

    fn navigator(config: NavigatorConfig) -> Navigator<ManualScheduler, Scene> {
        Navigator::new(
            config,
            Size::new(800.0, 600.0),
            Size::new(744.0, 1052.0),
            ManualScheduler::new(),
            Scene::new(None),
        )
        .unwrap()
    }

    /// Touch-pans by `delta` and releases, leaving an inertia run going.
    fn fling(nav: &mut Navigator<ManualScheduler, Scene>, delta: Vec2) {
        assert!(nav.on_pan_start(&TouchContext::fingers(1, false)));
        assert!(nav.on_pan(delta));
        assert!(nav.on_pan_end());
    }

    #[test]
    fn ctrl_wheel_zooms_about_cursor() {
        let mut nav = navigator(NavigatorConfig::default());
        assert_eq!(nav.view().zoom(), 1.0);
        let cursor = Point::new(400.0, 300.0);
        let before = nav.view().viewport_to_artboard(cursor);

        let handled = nav.on_wheel(&WheelInput::new(
            Vec2::new(0.0, -100.0),
            cursor,
            Modifiers::CTRL,
        ));
        assert!(handled);
        assert!((nav.view().zoom() - 1.105).abs() < 1e-3);
        let after = nav.view().viewport_to_artboard(cursor);
        assert!((after - before).hypot() < 1e-6);
    }

    #[test]
    fn chrome_offset_shifts_wheel_anchor() {
        let config = NavigatorConfig {
            chrome_offset: Vec2::new(20.0, 20.0),
            ..NavigatorConfig::default()
        };
        let mut nav = navigator(config);
        let local = Point::new(380.0, 280.0);
        let before = nav.view().viewport_to_artboard(local);
        nav.on_wheel(&WheelInput::new(
            Vec2::new(0.0, -200.0),
            Point::new(400.0, 300.0),
            Modifiers::META,
        ));
        let after = nav.view().viewport_to_artboard(local);
        assert!((after - before).hypot() < 1e-6);
    }

    #[test]
    fn touch_release_starts_inertia_and_frames_pan() {
        let mut nav = navigator(NavigatorConfig::default());
        nav.pan(Vec2::new(-100.0, -100.0));
        let start = nav.view().pan_offset();
        fling(&mut nav, Vec2::new(0.0, 10.0));
        assert!(nav.inertia().is_running());
        assert_eq!(nav.view().pan_offset(), start + Vec2::new(0.0, 10.0));

        let frame = nav.scheduler_mut().next_frame().unwrap();
        assert!(nav.on_animation_frame(frame));
        assert_eq!(nav.view().pan_offset(), start + Vec2::new(0.0, 19.0));
    }

    #[test]
    fn new_gesture_cancels_inertia() {
        let mut nav = navigator(NavigatorConfig::default());
        nav.pan(Vec2::new(0.0, -200.0));
        fling(&mut nav, Vec2::new(0.0, 20.0));
        // The host already dequeued the frame callback.
        let frame = nav.scheduler_mut().next_frame().unwrap();

        assert!(nav.on_mouse_down(MouseButton::Middle, Point::new(10.0, 10.0)));
        assert!(!nav.inertia().is_running());
        assert!(nav.on_mouse_move(Point::new(15.0, 10.0)));
        let after_drag = nav.view().pan_offset();

        assert!(!nav.on_animation_frame(frame));
        assert_eq!(nav.view().pan_offset(), after_drag);
    }

    #[test]
    fn programmatic_zoom_cancels_inertia() {
        let mut nav = navigator(NavigatorConfig::default());
        nav.pan(Vec2::new(0.0, -200.0));
        fling(&mut nav, Vec2::new(0.0, 20.0));
        nav.zoom_in();
        assert!(!nav.inertia().is_running());
        assert_eq!(nav.scheduler_mut().pending(), 0);
    }

    #[test]
    fn resize_keeps_inertia_running() {
        let mut nav = navigator(NavigatorConfig::default());
        nav.pan(Vec2::new(0.0, -200.0));
        fling(&mut nav, Vec2::new(0.0, 20.0));
        nav.resize(Size::new(1024.0, 768.0));
        assert!(nav.inertia().is_running());
    }

    #[test]
    fn drag_pan_disables_selection_mode_until_release() {
        let mut nav = navigator(NavigatorConfig::default());
        assert!(nav.on_key_down(Key::Space, Modifiers::empty()));
        assert!(nav.is_pan_ready());
        assert!(nav.on_mouse_down(MouseButton::Left, Point::ZERO));
        assert!(!nav.renderer().selection_mode);
        assert!(nav.is_panning());

        assert!(nav.on_key_up(Key::Space));
        assert!(nav.renderer().selection_mode);
        assert!(!nav.is_panning());
    }

    #[test]
    fn mouse_release_has_no_inertia_by_default() {
        let mut nav = navigator(NavigatorConfig::default());
        nav.on_mouse_down(MouseButton::Middle, Point::ZERO);
        nav.on_mouse_move(Point::new(0.0, 30.0));
        assert!(nav.on_mouse_up(MouseButton::Middle));
        assert!(!nav.inertia().is_running());
    }

    #[test]
    fn mouse_inertia_can_be_enabled() {
        let config = NavigatorConfig {
            mouse_inertia: true,
            ..NavigatorConfig::default()
        };
        let mut nav = navigator(config);
        nav.on_mouse_down(MouseButton::Middle, Point::ZERO);
        nav.on_mouse_move(Point::new(0.0, -30.0));
        nav.on_mouse_up(MouseButton::Middle);
        assert!(nav.inertia().is_running());
    }

    #[test]
    fn one_finger_on_selection_is_left_to_the_scene() {
        let mut nav = Navigator::new(
            NavigatorConfig::default(),
            Size::new(800.0, 600.0),
            Size::new(744.0, 1052.0),
            ManualScheduler::new(),
            Scene::new(Some(Rect::new(10.0, 10.0, 50.0, 50.0))),
        )
        .unwrap();
        let ctx = TouchContext::fingers(1, nav.renderer().has_selection());
        let start = nav.view().pan_offset();

        assert!(!nav.on_pan_start(&ctx));
        assert!(nav.renderer().selection_mode);
        assert!(!nav.on_pan(Vec2::new(0.0, 40.0)));
        assert!(!nav.on_pan_end());
        assert_eq!(nav.view().pan_offset(), start);
        assert!(!nav.inertia().is_running());

        nav.set_finger_pan_priority(true);
        assert!(nav.on_pan_start(&ctx));
        assert!(!nav.renderer().selection_mode);
    }

    #[test]
    fn pinch_zoom_anchors_at_center() {
        let mut nav = navigator(NavigatorConfig::default());
        let center = Point::new(300.0, 200.0);
        let before = nav.view().viewport_to_artboard(center);
        assert!(nav.on_pinch_zoom(1.5, center));
        assert!((nav.view().zoom() - 1.5).abs() < 1e-12);
        let after = nav.view().viewport_to_artboard(center);
        assert!((after - before).hypot() < 1e-6);

        assert!(!nav.on_pinch_zoom(-1.0, center));
        assert!(!nav.on_pinch_zoom(f64::NAN, center));
    }

    #[test]
    fn extreme_pinch_saturates_at_limits() {
        let mut nav = navigator(NavigatorConfig::default());
        let center = Point::new(300.0, 200.0);
        assert!(nav.on_pinch_zoom(f64::INFINITY, center));
        assert_eq!(nav.view().zoom(), nav.view().zoom_limits().max());
        assert!(nav.on_pinch_zoom(0.0, center));
        assert_eq!(nav.view().zoom(), nav.view().zoom_limits().min());
    }

    #[test]
    fn extreme_ctrl_wheel_saturates_at_limits() {
        let mut nav = navigator(NavigatorConfig::default());
        let cursor = Point::new(400.0, 300.0);
        assert!(nav.on_wheel(&WheelInput::new(Vec2::new(0.0, -1e6), cursor, Modifiers::CTRL)));
        assert_eq!(nav.view().zoom(), 5.0);
        assert!(nav.view().pan_offset().is_finite());
        assert!(nav.on_wheel(&WheelInput::new(Vec2::new(0.0, 1e6), cursor, Modifiers::CTRL)));
        assert_eq!(nav.view().zoom(), 0.1);
    }

    #[test]
    fn replaced_touch_session_restores_selection_mode() {
        let mut nav = navigator(NavigatorConfig::default());
        assert!(nav.on_pan_start(&TouchContext::fingers(2, false)));
        assert!(!nav.renderer().selection_mode);

        // A one-finger pan over a selection belongs to the scene.
        assert!(!nav.on_pan_start(&TouchContext::fingers(1, true)));
        assert!(nav.renderer().selection_mode);
        assert!(!nav.is_panning());
        assert!(!nav.on_pan_end());
        assert!(nav.renderer().selection_mode);
        assert!(!nav.inertia().is_running());
    }

    #[test]
    fn drag_pan_supersedes_touch_pan() {
        let mut nav = navigator(NavigatorConfig::default());
        nav.pan(Vec2::new(0.0, -200.0));
        assert!(nav.on_pan_start(&TouchContext::fingers(2, false)));
        assert!(nav.on_pan(Vec2::new(0.0, 10.0)));

        assert!(nav.on_mouse_down(MouseButton::Middle, Point::ZERO));
        assert!(!nav.renderer().selection_mode);
        let before = nav.view().pan_offset();
        assert!(!nav.on_pan(Vec2::new(0.0, 10.0)));
        assert_eq!(nav.view().pan_offset(), before);

        assert!(nav.on_mouse_up(MouseButton::Middle));
        assert!(nav.renderer().selection_mode);
        assert!(!nav.is_panning());
        assert!(!nav.on_pan_end());
        assert!(nav.renderer().selection_mode);
    }

    #[test]
    fn touch_pan_supersedes_drag_pan() {
        let mut nav = navigator(NavigatorConfig::default());
        nav.on_key_down(Key::Space, Modifiers::empty());
        assert!(nav.on_mouse_down(MouseButton::Left, Point::ZERO));
        assert!(!nav.renderer().selection_mode);

        assert!(!nav.on_pan_start(&TouchContext::fingers(1, true)));
        assert!(nav.renderer().selection_mode);
        assert!(!nav.is_panning());
        assert!(nav.is_pan_ready());
        assert!(!nav.on_mouse_move(Point::new(10.0, 10.0)));
        assert!(!nav.on_mouse_up(MouseButton::Left));
        assert!(nav.renderer().selection_mode);
    }

    #[test]
    fn space_press_is_handled() {
        let mut nav = navigator(NavigatorConfig::default());
        let state = nav.view().state();
        assert!(nav.on_key_down(Key::Space, Modifiers::empty()));
        assert!(nav.is_pan_ready());
        assert_eq!(nav.view().state(), state);
        assert!(!nav.on_key_down(Key::Other, Modifiers::empty()));
    }

    #[test]
    fn double_tap_fits_and_long_press_is_unhandled() {
        let mut nav = navigator(NavigatorConfig::default());
        assert!(nav.on_double_tap());
        assert!((nav.view().zoom() - 600.0 / 1052.0).abs() < 1e-9);
        let state = nav.view().state();
        assert!(!nav.on_long_press(Point::new(5.0, 5.0)));
        assert_eq!(nav.view().state(), state);
    }

    #[test]
    fn keyboard_shortcuts() {
        let mut nav = navigator(NavigatorConfig::default());
        assert!(nav.on_key_down(Key::Character('='), Modifiers::CTRL));
        assert!((nav.view().zoom() - 1.2).abs() < 1e-12);
        assert!(nav.on_key_down(Key::Character('0'), Modifiers::META));
        assert!(nav.view().zoom() < 1.0);
        assert!(nav.on_key_down(Key::Character('1'), Modifiers::CTRL));
        assert_eq!(nav.view().zoom(), 1.0);
        assert!(!nav.on_key_down(Key::Character('1'), Modifiers::empty()));
    }

    #[test]
    fn zoom_to_selection_reads_renderer() {
        let mut nav = navigator(NavigatorConfig::default());
        assert!(!nav.zoom_to_selection());
        nav.renderer_mut().selection = Some(Rect::new(100.0, 100.0, 300.0, 200.0));
        assert!(nav.zoom_to_selection());
        assert!(nav.view().zoom() > 1.0);
    }

    #[test]
    fn subscribers_see_inertia_frames() {
        let mut nav = navigator(NavigatorConfig::default());
        nav.pan(Vec2::new(0.0, -200.0));
        let calls = Rc::new(Cell::new(0_u32));
        let seen = Rc::clone(&calls);
        nav.subscribe(move |_| seen.set(seen.get() + 1));

        fling(&mut nav, Vec2::new(0.0, 10.0));
        let frame = nav.scheduler_mut().next_frame().unwrap();
        nav.on_animation_frame(frame);
        assert_eq!(calls.get(), 2);
    }
}
