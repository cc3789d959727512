//! VCOM (EXTCOMIN) signal generator
//!
//! The panel needs its common electrode polarity inverted periodically or
//! the liquid crystal degrades. The signal is produced entirely in
//! hardware:
//!
//! ```text
//! RTC COMPARE[n] ──► interconnect channel ──► GPIO task OUT[m] (toggle pin)
//! ```
//!
//! Each compare event toggles the pin once, so the compare has to fire at
//! twice the square-wave frequency. The compare interrupt is left enabled
//! for the firmware to call [`VcomGenerator::rearm`] from.

use gwatch_core::config::VcomConfig;
use gwatch_hal::gpio::TaskAction;
use gwatch_hal::interconnect::{EventSource, InterconnectError, TaskTarget};
use gwatch_hal::rtc::TICKS_PER_SECOND;
use gwatch_hal::{CompareTimer, EventRouter, GpioTask, Level, Route};

/// VCOM configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VcomError {
    /// The interconnect channel could not be assigned or enabled
    Interconnect(InterconnectError),
}

impl From<InterconnectError> for VcomError {
    fn from(err: InterconnectError) -> Self {
        VcomError::Interconnect(err)
    }
}

/// Compare interval in timer ticks for a square wave of `frequency_hz`
pub const fn interval_ticks(frequency_hz: u16) -> u32 {
    let toggles_per_second = 2 * frequency_hz as u32;
    if toggles_per_second == 0 {
        return TICKS_PER_SECOND;
    }
    let ticks = TICKS_PER_SECOND / toggles_per_second;
    if ticks == 0 {
        1
    } else {
        ticks
    }
}

/// Hardware-driven VCOM generator
pub struct VcomGenerator<C, G, R> {
    timer: C,
    gpio: G,
    router: R,
    config: VcomConfig,
}

impl<C, G, R> VcomGenerator<C, G, R>
where
    C: CompareTimer,
    G: GpioTask,
    R: EventRouter,
{
    /// Create a generator; nothing is touched until [`configure`](Self::configure)
    pub fn new(timer: C, gpio: G, router: R, config: VcomConfig) -> Self {
        Self {
            timer,
            gpio,
            router,
            config,
        }
    }

    /// Compare interval in ticks
    pub const fn interval(&self) -> u32 {
        interval_ticks(self.config.frequency_hz)
    }

    /// Wire compare event to pin toggle and start the first period
    pub fn configure(&mut self) -> Result<(), VcomError> {
        let cfg = self.config;

        self.gpio.configure_task(
            cfg.gpio_task_channel,
            cfg.pin,
            TaskAction::Toggle,
            Level::Low,
        );

        self.router.assign(Route {
            channel: cfg.interconnect_channel,
            event: EventSource::TimerCompare {
                channel: cfg.compare_channel,
            },
            task: TaskTarget::GpioOut {
                channel: cfg.gpio_task_channel,
            },
        })?;
        self.router.enable(cfg.interconnect_channel)?;

        self.rearm();
        self.timer.enable_compare_event(cfg.compare_channel);
        self.timer.enable_compare_interrupt(cfg.compare_channel);

        info!(
            "VCOM {} Hz on pin {}, compare {} every {} ticks",
            cfg.frequency_hz,
            cfg.pin,
            cfg.compare_channel,
            self.interval()
        );
        Ok(())
    }

    /// Schedule the next toggle one interval after the current counter
    ///
    /// Call from the compare interrupt.
    pub fn rearm(&mut self) {
        let next = self.timer.counter().wrapping_add(self.interval()) & self.timer.counter_mask();
        self.timer.set_compare(self.config.compare_channel, next);
    }

    /// Release the peripherals
    pub fn release(self) -> (C, G, R) {
        (self.timer, self.gpio, self.router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockRtc {
        counter: u32,
        compare: Option<(u8, u32)>,
        event_enabled: Vec<u8>,
        interrupt_enabled: Vec<u8>,
    }

    impl CompareTimer for MockRtc {
        const COUNTER_BITS: u32 = 24;

        fn counter(&self) -> u32 {
            self.counter
        }

        fn set_compare(&mut self, channel: u8, value: u32) {
            self.compare = Some((channel, value));
        }

        fn enable_compare_event(&mut self, channel: u8) {
            self.event_enabled.push(channel);
        }

        fn enable_compare_interrupt(&mut self, channel: u8) {
            self.interrupt_enabled.push(channel);
        }
    }

    #[derive(Default)]
    struct MockGpiote {
        tasks: Vec<(u8, u8, TaskAction, Level)>,
    }

    impl GpioTask for MockGpiote {
        fn configure_task(&mut self, channel: u8, pin: u8, action: TaskAction, initial: Level) {
            self.tasks.push((channel, pin, action, initial));
        }
    }

    #[derive(Default)]
    struct MockPpi {
        routes: Vec<Route>,
        enabled: Vec<u8>,
        refuse: Option<InterconnectError>,
    }

    impl EventRouter for MockPpi {
        fn assign(&mut self, route: Route) -> Result<(), InterconnectError> {
            if let Some(err) = self.refuse {
                return Err(err);
            }
            self.routes.push(route);
            Ok(())
        }

        fn enable(&mut self, channel: u8) -> Result<(), InterconnectError> {
            self.enabled.push(channel);
            Ok(())
        }
    }

    #[test]
    fn test_interval() {
        assert_eq!(interval_ticks(16), 1024);
        assert_eq!(interval_ticks(1), 16_384);
        assert_eq!(interval_ticks(0), TICKS_PER_SECOND);
        assert_eq!(interval_ticks(u16::MAX), 1);
    }

    #[test]
    fn test_configure() {
        let rtc = MockRtc {
            counter: 5000,
            ..Default::default()
        };
        let mut vcom = VcomGenerator::new(
            rtc,
            MockGpiote::default(),
            MockPpi::default(),
            VcomConfig::default(),
        );
        vcom.configure().unwrap();

        let (rtc, gpiote, ppi) = vcom.release();
        assert_eq!(gpiote.tasks, vec![(0, 21, TaskAction::Toggle, Level::Low)]);
        assert_eq!(
            ppi.routes,
            vec![Route {
                channel: 0,
                event: EventSource::TimerCompare { channel: 3 },
                task: TaskTarget::GpioOut { channel: 0 },
            }]
        );
        assert_eq!(ppi.enabled, vec![0]);
        assert_eq!(rtc.compare, Some((3, 6024)));
        assert_eq!(rtc.event_enabled, vec![3]);
        assert_eq!(rtc.interrupt_enabled, vec![3]);
    }

    #[test]
    fn test_rearm_wraps_counter() {
        let rtc = MockRtc {
            counter: 0x00FF_FF00,
            ..Default::default()
        };
        let mut vcom = VcomGenerator::new(
            rtc,
            MockGpiote::default(),
            MockPpi::default(),
            VcomConfig::default(),
        );
        vcom.rearm();

        let (rtc, _, _) = vcom.release();
        assert_eq!(rtc.compare, Some((3, 0x0000_0300)));
    }

    #[test]
    fn test_interconnect_refused() {
        let ppi = MockPpi {
            refuse: Some(InterconnectError::Reserved),
            ..Default::default()
        };
        let mut vcom = VcomGenerator::new(
            MockRtc::default(),
            MockGpiote::default(),
            ppi,
            VcomConfig::default(),
        );

        assert_eq!(
            vcom.configure(),
            Err(VcomError::Interconnect(InterconnectError::Reserved))
        );
        let (rtc, _, ppi) = vcom.release();
        assert!(ppi.enabled.is_empty());
        assert!(rtc.event_enabled.is_empty());
    }
}
