#![no_std]
#![no_main]

use core::mem::MaybeUninit;

use button_event_rp2040::{
    ButtonEngine, EngineConfig, EngineError, Events, Rp2040Board, HEAP_SIZE, POLL_PERIOD,
};
use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::{Flex, Pull};
use embassy_time::Ticker;
use embedded_alloc::LlffHeap as Heap;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

#[global_allocator]
static HEAP: Heap = Heap::empty();

/// Mode button: digital, active high.
const MODE_GPIO: u8 = 2;

/// Keypad resistor ladder on ADC0.
const LADDER_GPIO: u8 = 26;

/// Accepted deviation around each ladder level (12-bit ADC counts).
const LADDER_TOLERANCE: u16 = 120;

/// Ladder keys and the ADC level each one pulls the divider to.
const LADDER_KEYS: [(&str, u16); 3] = [("up", 680), ("down", 1365), ("fan", 2730)];

/// One mode button plus one analog input per ladder key.
const BUTTON_COUNT: usize = 1 + LADDER_KEYS.len();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    {
        static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
        // SAFETY: runs once, before anything allocates.
        unsafe { HEAP.init(core::ptr::addr_of_mut!(HEAP_MEM) as usize, HEAP_SIZE) }
    }

    info!("Button engine starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Board Setup ---
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let mut board = Rp2040Board::new(adc);
    unwrap!(board.add_digital(MODE_GPIO, Flex::new(p.PIN_2)));
    unwrap!(board.add_analog(LADDER_GPIO, adc::Channel::new_pin(p.PIN_26, Pull::Up)));

    spawner.spawn(button_task(board).unwrap());

    info!("Button engine initialized, polling every {} ms", POLL_PERIOD.as_millis());
}

/// Register the mode button and the ladder keys.
fn register_buttons(engine: &mut ButtonEngine<Rp2040Board<'static>>) -> Result<(), EngineError> {
    let mode = engine.register_digital(
        MODE_GPIO,
        Events::new()
            .on_down(|b| info!("mode: down (GPIO {})", b.pin))
            .on_up(|b| info!("mode: up after {} ms", b.elapsed_ms))
            .on_hold(1500, |b| info!("mode: held {} ms", b.elapsed_ms))
            .on_double(400, |b| info!("mode: double ({} ms apart)", b.elapsed_ms)),
    )?;
    engine.set_stun_default(mode, |b| info!("mode: idle for {} ms", b.elapsed_ms))?;

    for (name, reference) in LADDER_KEYS {
        engine.register_analog(
            LADDER_GPIO,
            reference,
            LADDER_TOLERANCE,
            Events::new()
                .on_down(move |_| info!("{}: down", name))
                .on_up(move |b| info!("{}: up after {} ms", name, b.elapsed_ms))
                .on_hold(800, move |b| info!("{}: held {} ms", name, b.elapsed_ms)),
        )?;
    }

    Ok(())
}

/// Button task - owns the engine and polls it once per tick.
#[embassy_executor::task]
async fn button_task(board: Rp2040Board<'static>) {
    let mut engine =
        ButtonEngine::with_config(board, EngineConfig::with_initial_capacity(BUTTON_COUNT));
    if let Err(e) = register_buttons(&mut engine) {
        defmt::panic!("button registration failed: {}", e);
    }
    info!("{} buttons registered", engine.len());

    let mut ticker = Ticker::every(POLL_PERIOD);
    loop {
        engine.poll();
        ticker.next().await;
    }
}
