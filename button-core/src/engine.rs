//! ButtonEngine: the input registry and its poll-driven state machine.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::board::{Board, Pull, Sampling};
use crate::config::{EngineConfig, DEFAULT_DOUBLE_MS, DEFAULT_HOLD_MS, DEFAULT_STUN_MS};
use crate::error::EngineError;
use crate::events::{EventKind, Events, Handler, Handlers};
use crate::info::ButtonInfo;

/// Stable handle of a registered input.
///
/// Ids are assigned in registration order starting at 0 and stay valid for
/// the lifetime of the engine; inputs are never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub usize);

impl ButtonId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One registry entry: the descriptor plus the callbacks it is lent to.
struct Slot {
    info: ButtonInfo,
    handlers: Handlers,
}

impl Slot {
    /// Advance this input's state machine by one sample taken at `now`.
    fn step(&mut self, index: usize, pressed: bool, now: u32) {
        let Slot { info, handlers } = self;

        if pressed {
            if info.is_pressed() {
                let hold_armed = handlers.on_hold.is_some() && info.hold_threshold_ms > 0;
                if hold_armed && !info.is_holding() {
                    let held = info.press_start_ms.map_or(0, |start| now.wrapping_sub(start));
                    if held >= info.hold_threshold_ms {
                        info.elapsed_ms = held;
                        fire(index, EventKind::Hold, info, &mut handlers.on_hold);
                        info.set_holding(true);
                    }
                }
            } else {
                // The previous press edge is the double-press baseline, and is
                // replaced whether or not this edge turns out to be a double.
                let gap = info
                    .press_start_ms
                    .replace(now)
                    .map(|start| now.wrapping_sub(start));
                let double_armed = handlers.on_double.is_some() && info.double_threshold_ms > 0;
                let kind = match gap {
                    Some(gap) if double_armed && gap <= info.double_threshold_ms => {
                        EventKind::Double
                    }
                    _ => EventKind::Down,
                };
                info.elapsed_ms = gap.unwrap_or(0);
                fire(index, kind, info, handlers.slot(kind));
            }
            info.last_transition_ms = now;
            info.set_stunned(false);
        } else if handlers.on_stun.is_some()
            && info.stun_threshold_ms > 0
            && !info.is_stunned()
        {
            let released = now.wrapping_sub(info.last_transition_ms);
            if released > info.stun_threshold_ms {
                info.elapsed_ms = released;
                fire(index, EventKind::Stun, info, &mut handlers.on_stun);
                info.set_stunned(true);
            }
        }

        if !pressed && info.is_pressed() {
            info.elapsed_ms = info
                .press_start_ms
                .map_or(0, |start| now.wrapping_sub(start));
            info.release_start_ms = Some(now);
            fire(index, EventKind::Up, info, &mut handlers.on_up);
            info.set_holding(false);
        }

        info.set_pressed(pressed);
    }
}

/// Invoke `handler` if present.
#[inline]
fn fire(index: usize, kind: EventKind, info: &mut ButtonInfo, handler: &mut Option<Handler>) {
    if let Some(handler) = handler {
        trace!("button {} pin {}: {}", index, info.pin, kind.as_str());
        handler(info);
    }
}

/// Registry of inputs and the poll cycle that turns samples into events.
///
/// The engine owns its [`Board`] and is driven by the host calling
/// [`poll`](Self::poll) once per scheduler tick. Inputs are processed in
/// registration order; each one is sampled, timestamped, and advanced
/// through Released / Pressed / Held before the next is touched.
///
/// # Example
///
/// ```
/// use button_core::{ButtonEngine, Events, SimBoard};
///
/// let mut engine = ButtonEngine::new(SimBoard::new());
/// let id = engine
///     .register_digital(2, Events::new().on_hold(1000, |b| assert!(b.elapsed_ms >= 1000)))
///     .unwrap();
///
/// engine.board_mut().press(2);
/// engine.poll();
/// engine.board_mut().set_time(1000);
/// engine.poll();
/// assert!(engine.get(id).unwrap().is_holding());
/// ```
pub struct ButtonEngine<B> {
    board: B,
    slots: Vec<Slot>,
    config: EngineConfig,
}

impl<B: Board> ButtonEngine<B> {
    /// Create an empty engine. Nothing is allocated until the first registration.
    pub fn new(board: B) -> Self {
        Self::with_config(board, EngineConfig::DEFAULT)
    }

    /// Create an empty engine with explicit registry sizing.
    pub fn with_config(board: B, config: EngineConfig) -> Self {
        Self {
            board,
            slots: Vec::new(),
            config,
        }
    }

    /// Register a digital input, pressed while the pin reads high.
    ///
    /// The pin is configured as a plain input.
    pub fn register_digital(&mut self, pin: u8, events: Events) -> Result<ButtonId, EngineError> {
        self.register(pin, Sampling::Digital, Pull::None, events)
    }

    /// Register an analog input, pressed while the reading lies within
    /// `reference ± tolerance` (inclusive).
    ///
    /// The pin is configured as an input with pull-up.
    pub fn register_analog(
        &mut self,
        pin: u8,
        reference: u16,
        tolerance: u16,
        events: Events,
    ) -> Result<ButtonId, EngineError> {
        let sampling = Sampling::Analog {
            reference,
            tolerance,
        };
        self.register(pin, sampling, Pull::Up, events)
    }

    fn register(
        &mut self,
        pin: u8,
        sampling: Sampling,
        pull: Pull,
        events: Events,
    ) -> Result<ButtonId, EngineError> {
        self.reserve_next()?;

        self.board.configure_input(pin, sampling, pull);

        let mut info = ButtonInfo::new(pin, sampling);
        info.hold_threshold_ms = events.hold_threshold_ms;
        info.double_threshold_ms = events.double_threshold_ms;
        info.stun_threshold_ms = events.stun_threshold_ms;

        let id = ButtonId(self.slots.len());
        self.slots.push(Slot {
            info,
            handlers: events.handlers,
        });
        debug!("registered button {} on pin {}", id.0, pin);
        Ok(id)
    }

    /// Make room for one more slot, growing by exactly what is needed.
    ///
    /// The first allocation honours the configured initial capacity; the
    /// registry never shrinks.
    fn reserve_next(&mut self) -> Result<(), EngineError> {
        if self.slots.len() < self.slots.capacity() {
            return Ok(());
        }
        let additional = if self.slots.capacity() == 0 {
            self.config.initial_capacity.max(1)
        } else {
            1
        };
        self.slots.try_reserve_exact(additional).map_err(|e| {
            error!("button registry growth by {} failed", additional);
            EngineError::from(e)
        })
    }

    fn slot_mut(&mut self, id: ButtonId) -> Result<&mut Slot, EngineError> {
        let count = self.slots.len();
        self.slots.get_mut(id.0).ok_or_else(|| {
            error!("button {} not registered ({} registered)", id.0, count);
            EngineError::InvalidButton {
                index: id.0,
                count,
            }
        })
    }

    /// Replace the hold callback and threshold. A threshold of 0 disables hold.
    pub fn set_hold(
        &mut self,
        id: ButtonId,
        f: impl FnMut(&mut ButtonInfo) + 'static,
        threshold_ms: u32,
    ) -> Result<(), EngineError> {
        let slot = self.slot_mut(id)?;
        slot.info.hold_threshold_ms = threshold_ms;
        slot.handlers.on_hold = Some(Box::new(f));
        debug!("button {} hold set to {} ms", id.0, threshold_ms);
        Ok(())
    }

    /// [`set_hold`](Self::set_hold) with [`DEFAULT_HOLD_MS`].
    pub fn set_hold_default(
        &mut self,
        id: ButtonId,
        f: impl FnMut(&mut ButtonInfo) + 'static,
    ) -> Result<(), EngineError> {
        self.set_hold(id, f, DEFAULT_HOLD_MS)
    }

    /// Replace the down callback.
    pub fn set_down(
        &mut self,
        id: ButtonId,
        f: impl FnMut(&mut ButtonInfo) + 'static,
    ) -> Result<(), EngineError> {
        self.slot_mut(id)?.handlers.on_down = Some(Box::new(f));
        debug!("button {} down set", id.0);
        Ok(())
    }

    /// Replace the up callback.
    pub fn set_up(
        &mut self,
        id: ButtonId,
        f: impl FnMut(&mut ButtonInfo) + 'static,
    ) -> Result<(), EngineError> {
        self.slot_mut(id)?.handlers.on_up = Some(Box::new(f));
        debug!("button {} up set", id.0);
        Ok(())
    }

    /// Replace the double-press callback and window. A window of 0 disables
    /// double detection and every press edge reports down.
    pub fn set_double(
        &mut self,
        id: ButtonId,
        f: impl FnMut(&mut ButtonInfo) + 'static,
        threshold_ms: u32,
    ) -> Result<(), EngineError> {
        let slot = self.slot_mut(id)?;
        slot.info.double_threshold_ms = threshold_ms;
        slot.handlers.on_double = Some(Box::new(f));
        debug!("button {} double set to {} ms", id.0, threshold_ms);
        Ok(())
    }

    /// [`set_double`](Self::set_double) with [`DEFAULT_DOUBLE_MS`].
    pub fn set_double_default(
        &mut self,
        id: ButtonId,
        f: impl FnMut(&mut ButtonInfo) + 'static,
    ) -> Result<(), EngineError> {
        self.set_double(id, f, DEFAULT_DOUBLE_MS)
    }

    /// Replace the stun callback and threshold. A threshold of 0 disables stun.
    pub fn set_stun(
        &mut self,
        id: ButtonId,
        f: impl FnMut(&mut ButtonInfo) + 'static,
        threshold_ms: u32,
    ) -> Result<(), EngineError> {
        let slot = self.slot_mut(id)?;
        slot.info.stun_threshold_ms = threshold_ms;
        slot.handlers.on_stun = Some(Box::new(f));
        debug!("button {} stun set to {} ms", id.0, threshold_ms);
        Ok(())
    }

    /// [`set_stun`](Self::set_stun) with [`DEFAULT_STUN_MS`].
    pub fn set_stun_default(
        &mut self,
        id: ButtonId,
        f: impl FnMut(&mut ButtonInfo) + 'static,
    ) -> Result<(), EngineError> {
        self.set_stun(id, f, DEFAULT_STUN_MS)
    }

    /// Remove a callback. Thresholds are left as they are.
    pub fn clear(&mut self, id: ButtonId, kind: EventKind) -> Result<(), EngineError> {
        *self.slot_mut(id)?.handlers.slot(kind) = None;
        debug!("button {} {} cleared", id.0, kind.as_str());
        Ok(())
    }

    /// Sample every input once and fire the callbacks that are due.
    pub fn poll(&mut self) {
        let board = &mut self.board;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let pin = slot.info.pin;
            let pressed = match slot.info.sampling {
                Sampling::Digital => board.digital_read(pin),
                window @ Sampling::Analog { .. } => window.window_contains(board.analog_read(pin)),
            };
            let now = board.now_ms();
            slot.step(index, pressed, now);
        }
    }

    /// Descriptor of a registered input.
    #[must_use]
    pub fn get(&self, id: ButtonId) -> Option<&ButtonInfo> {
        self.slots.get(id.0).map(|slot| &slot.info)
    }

    /// Mutable descriptor of a registered input, e.g. to retune thresholds.
    pub fn get_mut(&mut self, id: ButtonId) -> Option<&mut ButtonInfo> {
        self.slots.get_mut(id.0).map(|slot| &mut slot.info)
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ButtonInfo> + '_ {
        self.slots.iter().map(|slot| &slot.info)
    }

    /// Number of registered inputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of inputs the registry can hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Get a reference to the board.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Get a mutable reference to the board.
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Drop the registry and return the board.
    pub fn into_board(self) -> B {
        self.board
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::sim::SimBoard;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec;
    use std::vec::Vec;

    /// (event, pin, elapsed_ms) in the order callbacks ran.
    type Log = Rc<RefCell<Vec<(EventKind, u8, u32)>>>;

    fn record(log: &Log, kind: EventKind) -> impl FnMut(&mut ButtonInfo) + 'static {
        let log = log.clone();
        move |info: &mut ButtonInfo| log.borrow_mut().push((kind, info.pin, info.elapsed_ms))
    }

    fn kinds(log: &Log) -> Vec<EventKind> {
        log.borrow().iter().map(|&(kind, _, _)| kind).collect()
    }

    fn recording(log: &Log, hold_ms: u32, double_ms: u32, stun_ms: u32) -> Events {
        Events::new()
            .on_down(record(log, EventKind::Down))
            .on_up(record(log, EventKind::Up))
            .on_hold(hold_ms, record(log, EventKind::Hold))
            .on_double(double_ms, record(log, EventKind::Double))
            .on_stun(stun_ms, record(log, EventKind::Stun))
    }

    fn poll_at(engine: &mut ButtonEngine<SimBoard>, now_ms: u32) {
        engine.board_mut().set_time(now_ms);
        engine.poll();
    }

    fn press_at(engine: &mut ButtonEngine<SimBoard>, pin: u8, now_ms: u32) {
        engine.board_mut().press(pin);
        poll_at(engine, now_ms);
    }

    fn release_at(engine: &mut ButtonEngine<SimBoard>, pin: u8, now_ms: u32) {
        engine.board_mut().release(pin);
        poll_at(engine, now_ms);
    }

    #[test]
    fn test_press_then_release_fires_down_then_up() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        engine
            .register_digital(2, recording(&log, 1000, 0, 0))
            .unwrap();

        press_at(&mut engine, 2, 0);
        release_at(&mut engine, 2, 10);

        assert_eq!(
            *log.borrow(),
            vec![(EventKind::Down, 2, 0), (EventKind::Up, 2, 10)]
        );
    }

    #[test]
    fn test_hold_fires_once_per_press() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        let id = engine
            .register_digital(2, recording(&log, 1000, 0, 0))
            .unwrap();

        press_at(&mut engine, 2, 0);
        for t in (100..=3000).step_by(100) {
            poll_at(&mut engine, t);
        }
        assert!(engine.get(id).unwrap().is_holding());
        assert_eq!(kinds(&log), vec![EventKind::Down, EventKind::Hold]);
        assert_eq!(log.borrow()[1].2, 1000);

        release_at(&mut engine, 2, 3100);
        assert!(!engine.get(id).unwrap().is_holding());

        press_at(&mut engine, 2, 4000);
        poll_at(&mut engine, 5000);
        poll_at(&mut engine, 5100);
        assert_eq!(
            kinds(&log),
            vec![
                EventKind::Down,
                EventKind::Hold,
                EventKind::Up,
                EventKind::Down,
                EventKind::Hold,
            ]
        );
    }

    #[test]
    fn test_double_within_window_replaces_down() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        engine
            .register_digital(4, recording(&log, 0, 300, 0))
            .unwrap();

        press_at(&mut engine, 4, 0);
        release_at(&mut engine, 4, 50);
        press_at(&mut engine, 4, 200);

        assert_eq!(
            *log.borrow(),
            vec![
                (EventKind::Down, 4, 0),
                (EventKind::Up, 4, 50),
                (EventKind::Double, 4, 200),
            ]
        );
    }

    #[test]
    fn test_double_at_window_edge_is_double() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        engine
            .register_digital(4, recording(&log, 0, 300, 0))
            .unwrap();

        press_at(&mut engine, 4, 1000);
        release_at(&mut engine, 4, 1100);
        press_at(&mut engine, 4, 1300);

        assert_eq!(kinds(&log).last(), Some(&EventKind::Double));
    }

    #[test]
    fn test_press_outside_window_is_down_and_resets_baseline() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        engine
            .register_digital(4, recording(&log, 0, 300, 0))
            .unwrap();

        press_at(&mut engine, 4, 0);
        release_at(&mut engine, 4, 50);
        press_at(&mut engine, 4, 400);
        release_at(&mut engine, 4, 450);
        // 200 ms after the mis-timed edge at 400, not 600 ms after the first.
        press_at(&mut engine, 4, 600);

        assert_eq!(
            *log.borrow(),
            vec![
                (EventKind::Down, 4, 0),
                (EventKind::Up, 4, 50),
                (EventKind::Down, 4, 400),
                (EventKind::Up, 4, 50),
                (EventKind::Double, 4, 200),
            ]
        );
    }

    #[test]
    fn test_first_press_is_never_double() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        engine
            .register_digital(4, recording(&log, 0, 500, 0))
            .unwrap();

        press_at(&mut engine, 4, 100);

        assert_eq!(kinds(&log), vec![EventKind::Down]);
    }

    #[test]
    fn test_stun_fires_once_and_rearms_after_press() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        let id = engine
            .register_digital(7, recording(&log, 0, 0, 3000))
            .unwrap();

        press_at(&mut engine, 7, 0);
        release_at(&mut engine, 7, 100);
        poll_at(&mut engine, 3000);
        assert!(!kinds(&log).contains(&EventKind::Stun));

        poll_at(&mut engine, 3001);
        poll_at(&mut engine, 5000);
        poll_at(&mut engine, 9000);
        assert!(engine.get(id).unwrap().is_stunned());
        assert_eq!(
            kinds(&log),
            vec![EventKind::Down, EventKind::Up, EventKind::Stun]
        );

        press_at(&mut engine, 7, 9100);
        assert!(!engine.get(id).unwrap().is_stunned());
        release_at(&mut engine, 7, 9200);
        poll_at(&mut engine, 12_101);

        let stuns = kinds(&log)
            .into_iter()
            .filter(|&kind| kind == EventKind::Stun)
            .count();
        assert_eq!(stuns, 2);
    }

    #[test]
    fn test_stun_before_any_press_counts_from_boot() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        engine
            .register_digital(7, recording(&log, 0, 0, 3000))
            .unwrap();

        poll_at(&mut engine, 2000);
        assert!(log.borrow().is_empty());
        poll_at(&mut engine, 3001);
        assert_eq!(*log.borrow(), vec![(EventKind::Stun, 7, 3001)]);
    }

    #[test]
    fn test_analog_window_boundaries() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        engine
            .register_analog(0, 512, 20, recording(&log, 0, 0, 0))
            .unwrap();

        let mut sample_at = |value: u16, t: u32| {
            engine.board_mut().set_analog(0, value);
            poll_at(&mut engine, t);
        };

        sample_at(492, 0);
        sample_at(491, 10);
        sample_at(532, 20);
        sample_at(533, 30);

        assert_eq!(
            kinds(&log),
            vec![
                EventKind::Down,
                EventKind::Up,
                EventKind::Down,
                EventKind::Up,
            ]
        );
    }

    #[test]
    fn test_registration_configures_pins() {
        let mut engine = ButtonEngine::new(SimBoard::new());
        engine.register_digital(2, Events::new()).unwrap();
        engine.register_analog(1, 300, 15, Events::new()).unwrap();

        assert_eq!(
            engine.board().configured(),
            &[
                (2, Sampling::Digital, Pull::None),
                (
                    1,
                    Sampling::Analog {
                        reference: 300,
                        tolerance: 15
                    },
                    Pull::Up
                ),
            ]
        );
    }

    #[test]
    fn test_inputs_polled_in_registration_order_without_crosstalk() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        for pin in [6, 3, 9, 4, 5] {
            engine
                .register_digital(pin, recording(&log, 500, 0, 0))
                .unwrap();
        }
        assert_eq!(engine.len(), 5);

        engine.board_mut().press(9);
        engine.board_mut().press(4);
        poll_at(&mut engine, 0);
        assert_eq!(engine.board().reads(), &[6, 3, 9, 4, 5]);

        engine.board_mut().release(9);
        poll_at(&mut engine, 600);

        assert_eq!(
            *log.borrow(),
            vec![
                (EventKind::Down, 9, 0),
                (EventKind::Down, 4, 0),
                (EventKind::Up, 9, 600),
                (EventKind::Hold, 4, 600),
            ]
        );
        let pressed: Vec<u8> = engine
            .iter()
            .filter(|info| info.is_pressed())
            .map(|info| info.pin)
            .collect();
        assert_eq!(pressed, vec![4]);
    }

    #[test]
    fn test_hold_scenario_pin_two() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        engine
            .register_digital(
                2,
                Events::new()
                    .on_down(record(&log, EventKind::Down))
                    .on_up(record(&log, EventKind::Up))
                    .on_hold(1000, record(&log, EventKind::Hold))
                    .on_double(0, record(&log, EventKind::Double)),
            )
            .unwrap();

        press_at(&mut engine, 2, 0);
        poll_at(&mut engine, 500);
        assert_eq!(kinds(&log), vec![EventKind::Down]);
        poll_at(&mut engine, 1000);
        release_at(&mut engine, 2, 1100);

        assert_eq!(
            *log.borrow(),
            vec![
                (EventKind::Down, 2, 0),
                (EventKind::Hold, 2, 1000),
                (EventKind::Up, 2, 1100),
            ]
        );
    }

    #[test]
    fn test_callback_can_disable_its_own_hold() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        let hold_log = log.clone();
        let id = engine
            .register_digital(
                3,
                Events::new().on_hold(200, move |info| {
                    hold_log.borrow_mut().push((EventKind::Hold, info.pin, info.elapsed_ms));
                    info.hold_threshold_ms = 0;
                }),
            )
            .unwrap();

        press_at(&mut engine, 3, 0);
        poll_at(&mut engine, 250);
        release_at(&mut engine, 3, 300);
        press_at(&mut engine, 3, 400);
        poll_at(&mut engine, 1000);

        assert_eq!(*log.borrow(), vec![(EventKind::Hold, 3, 250)]);
        assert_eq!(engine.get(id).unwrap().hold_threshold_ms, 0);
    }

    #[test]
    fn test_zero_threshold_disables_feature() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        engine
            .register_digital(5, recording(&log, 0, 0, 0))
            .unwrap();

        press_at(&mut engine, 5, 0);
        poll_at(&mut engine, 10_000);
        release_at(&mut engine, 5, 10_050);
        press_at(&mut engine, 5, 10_060);
        release_at(&mut engine, 5, 10_070);
        poll_at(&mut engine, 50_000);

        assert_eq!(
            kinds(&log),
            vec![
                EventKind::Down,
                EventKind::Up,
                EventKind::Down,
                EventKind::Up,
            ]
        );
    }

    #[test]
    fn test_setters_configure_registered_button() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        let id = engine.register_digital(8, Events::new()).unwrap();

        engine.set_down(id, record(&log, EventKind::Down)).unwrap();
        engine.set_up(id, record(&log, EventKind::Up)).unwrap();
        engine.set_hold_default(id, record(&log, EventKind::Hold)).unwrap();
        engine
            .set_double_default(id, record(&log, EventKind::Double))
            .unwrap();
        engine.set_stun(id, record(&log, EventKind::Stun), 100).unwrap();

        let info = engine.get(id).unwrap();
        assert_eq!(info.hold_threshold_ms, DEFAULT_HOLD_MS);
        assert_eq!(info.double_threshold_ms, DEFAULT_DOUBLE_MS);
        assert_eq!(info.stun_threshold_ms, 100);

        press_at(&mut engine, 8, 0);
        poll_at(&mut engine, 1000);
        release_at(&mut engine, 8, 1050);
        poll_at(&mut engine, 1200);

        assert_eq!(
            kinds(&log),
            vec![
                EventKind::Down,
                EventKind::Hold,
                EventKind::Up,
                EventKind::Stun,
            ]
        );
    }

    #[test]
    fn test_clear_removes_callback() {
        let log = Log::default();
        let mut engine = ButtonEngine::new(SimBoard::new());
        let id = engine
            .register_digital(2, recording(&log, 0, 0, 0))
            .unwrap();

        engine.clear(id, EventKind::Down).unwrap();
        press_at(&mut engine, 2, 0);
        release_at(&mut engine, 2, 10);

        assert_eq!(kinds(&log), vec![EventKind::Up]);
    }

    #[test]
    fn test_unknown_button_is_rejected() {
        let mut engine = ButtonEngine::new(SimBoard::new());
        engine.register_digital(2, Events::new()).unwrap();

        let result = engine.set_down(ButtonId(3), |_| {});
        assert_eq!(
            result,
            Err(EngineError::InvalidButton { index: 3, count: 1 })
        );
        assert!(matches!(
            engine.set_stun(ButtonId(1), |_| {}, 10),
            Err(EngineError::InvalidButton { index: 1, .. })
        ));
        assert!(engine.get(ButtonId(1)).is_none());
    }

    #[test]
    fn test_engine_can_borrow_its_board() {
        let mut board = SimBoard::new();
        {
            let mut engine = ButtonEngine::new(&mut board);
            engine.register_digital(2, Events::new()).unwrap();
            engine.poll();
        }
        assert_eq!(board.reads(), &[2]);
        assert_eq!(board.configured().len(), 1);
    }

    #[test]
    fn test_registry_grows_without_disturbing_existing_buttons() {
        let mut engine =
            ButtonEngine::with_config(SimBoard::new(), EngineConfig::with_initial_capacity(3));
        assert_eq!(engine.capacity(), 0);

        let first = engine.register_analog(0, 100, 5, Events::new()).unwrap();
        assert!(engine.capacity() >= 3);
        let before = *engine.get(first).unwrap();

        let mut last_capacity = engine.capacity();
        for (n, pin) in (1..=8).enumerate() {
            let id = engine.register_digital(pin, Events::new()).unwrap();
            assert_eq!(id, ButtonId(n + 1));
            assert!(engine.capacity() >= engine.len());
            assert!(engine.capacity() >= last_capacity);
            last_capacity = engine.capacity();
        }

        assert_eq!(engine.len(), 9);
        assert_eq!(*engine.get(first).unwrap(), before);
    }
}
