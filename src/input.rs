use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::os::unix::fs::OpenOptionsExt;
use std::process::Command;

use log::{debug, warn};
use memmap2::{MmapMut, MmapOptions};

use crate::config::ButtonConfig;
use crate::error::KioskError;
use crate::traits::ButtonPad;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Play,
    Next,
    Prev,
    Stop,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Play, Button::Next, Button::Prev, Button::Stop];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of buttons, held or freshly pressed depending on context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const EMPTY: ButtonSet = ButtonSet(0);

    pub fn of(buttons: &[Button]) -> Self {
        buttons.iter().fold(Self::EMPTY, |set, &b| set.with(b))
    }

    pub fn with(self, button: Button) -> Self {
        ButtonSet(self.0 | button.bit())
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub fn contains(&self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(|b| self.contains(*b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonBinding {
    pub button: Button,
    pub pin: u32,
}

/// Which data register bit drives which button.
#[derive(Debug, Clone, Default)]
pub struct ButtonMap {
    bindings: Vec<ButtonBinding>,
    active_low: bool,
}

impl ButtonMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ButtonConfig) -> Self {
        let mut map = Self::new();
        map.active_low = config.active_low;
        map.bind(Button::Play, config.play_pin);
        map.bind(Button::Next, config.next_pin);
        map.bind(Button::Prev, config.prev_pin);
        map.bind(Button::Stop, config.stop_pin);
        map
    }

    pub fn bind(&mut self, button: Button, pin: u32) {
        self.bindings.push(ButtonBinding { button, pin });
    }

    pub fn pins(&self) -> impl Iterator<Item = u32> + '_ {
        self.bindings.iter().map(|b| b.pin)
    }

    /// Buttons held according to one read of the data register.
    pub fn resolve(&self, level: u32) -> ButtonSet {
        let mut held = ButtonSet::EMPTY;
        for b in &self.bindings {
            let high = level & (1 << b.pin) != 0;
            if high != self.active_low {
                held.insert(b.button);
            }
        }
        held
    }
}

/// Turns held levels into press events: a button reports once when it goes
/// down and not again until it has been released.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonEdges {
    previous: ButtonSet,
}

impl ButtonEdges {
    pub fn update(&mut self, held: ButtonSet) -> ButtonSet {
        let pressed = ButtonSet(held.0 & !self.previous.0);
        self.previous = held;
        pressed
    }
}

/// Replays a fixed sequence of held sets, then reports nothing held.
#[derive(Debug, Clone, Default)]
pub struct ScriptedButtons {
    frames: VecDeque<ButtonSet>,
}

impl ScriptedButtons {
    pub fn new(frames: impl IntoIterator<Item = ButtonSet>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn push(&mut self, held: ButtonSet) {
        self.frames.push_back(held);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl ButtonPad for ScriptedButtons {
    fn poll(&mut self) -> Result<ButtonSet, KioskError> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }
}

const PORT_STRIDE: u64 = 0x24;
const DATA_OFFSET: u64 = 0x10;
const PAGE_SIZE: u64 = 4096;
const MODE_INPUT: u32 = 0;
const MODE_OUTPUT: u32 = 1;

/// The registers of one GPIO port.
///
/// Normally a window of `/dev/mem` mapped once for the life of the pad.
/// Without `/dev/mem` every access shells out to `devmem`.
pub enum Registers {
    Mapped { map: MmapMut, offset: usize },
    Devmem { base: u64 },
}

impl Registers {
    /// Maps the pages holding the port registers that start at `base`.
    pub fn map(base: u64) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(nix::libc::O_SYNC)
            .open("/dev/mem")?;
        let page = base & !(PAGE_SIZE - 1);
        let offset = base - page;
        let len = (offset + PORT_STRIDE).div_ceil(PAGE_SIZE) * PAGE_SIZE;
        // SAFETY: the window covers whole device register pages. Accesses
        // stay inside it and are single volatile loads and stores.
        let map = unsafe {
            MmapOptions::new()
                .offset(page)
                .len(len as usize)
                .map_mut(&file)?
        };
        Ok(Registers::Mapped {
            map,
            offset: offset as usize,
        })
    }

    fn read(&self, reg: u64) -> Result<u32, KioskError> {
        match self {
            Registers::Mapped { map, offset } => {
                let at = offset + reg as usize;
                let word = map
                    .get(at..at + 4)
                    .ok_or_else(|| KioskError::Gpio(format!("register {reg:#x} outside the window")))?;
                // SAFETY: four in-bounds bytes at a word-aligned address.
                Ok(unsafe { std::ptr::read_volatile(word.as_ptr() as *const u32) })
            }
            Registers::Devmem { base } => devmem_read(base + reg),
        }
    }

    fn write(&mut self, reg: u64, value: u32) -> Result<(), KioskError> {
        match self {
            Registers::Mapped { map, offset } => {
                let at = *offset + reg as usize;
                let word = map
                    .get_mut(at..at + 4)
                    .ok_or_else(|| KioskError::Gpio(format!("register {reg:#x} outside the window")))?;
                // SAFETY: as in `read`.
                unsafe { std::ptr::write_volatile(word.as_mut_ptr() as *mut u32, value) };
                Ok(())
            }
            Registers::Devmem { base } => devmem_write(*base + reg, value),
        }
    }
}

/// Push-buttons wired to one GPIO port.
pub struct GpioButtons {
    regs: Registers,
    map: ButtonMap,
}

impl GpioButtons {
    pub fn open(config: &ButtonConfig) -> Result<Self, KioskError> {
        let base = config.gpio_base + PORT_STRIDE * config.port as u64;
        let regs = Registers::map(base).unwrap_or_else(|e| {
            warn!("cannot map gpio registers ({e}), falling back to devmem");
            Registers::Devmem { base }
        });
        debug!("gpio port at {base:#010x}");
        Self::with_registers(regs, config)
    }

    /// Configures the button pins as inputs and drives the enable pin high.
    pub fn with_registers(regs: Registers, config: &ButtonConfig) -> Result<Self, KioskError> {
        let mut gpio = Self {
            regs,
            map: ButtonMap::from_config(config),
        };
        let pins: Vec<u32> = gpio.map.pins().collect();
        for pin in pins {
            gpio.set_mode(pin, MODE_INPUT)?;
        }
        if let Some(pin) = config.enable_pin {
            gpio.set_mode(pin, MODE_OUTPUT)?;
            gpio.write_pin(pin, true)?;
        }
        Ok(gpio)
    }

    fn set_mode(&mut self, pin: u32, mode: u32) -> Result<(), KioskError> {
        let reg = (pin / 8) as u64 * 4;
        let shift = (pin % 8) * 4;
        let value = self.regs.read(reg)?;
        self.regs.write(reg, (value & !(7 << shift)) | (mode << shift))
    }

    fn write_pin(&mut self, pin: u32, high: bool) -> Result<(), KioskError> {
        let bit = 1 << pin;
        let value = self.regs.read(DATA_OFFSET)?;
        self.regs
            .write(DATA_OFFSET, (value & !bit) | if high { bit } else { 0 })
    }
}

impl ButtonPad for GpioButtons {
    fn poll(&mut self) -> Result<ButtonSet, KioskError> {
        let level = self.regs.read(DATA_OFFSET)?;
        Ok(self.map.resolve(level))
    }
}

pub fn parse_devmem_output(text: &str) -> Option<u32> {
    let text = text.trim();
    let hex = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u32::from_str_radix(hex, 16).ok()
}

fn devmem_read(addr: u64) -> Result<u32, KioskError> {
    let output = Command::new("devmem").arg(format!("{addr:#010x}")).output()?;
    let text = String::from_utf8_lossy(&output.stdout);
    parse_devmem_output(&text)
        .ok_or_else(|| KioskError::Gpio(format!("devmem {addr:#010x} returned {text:?}")))
}

fn devmem_write(addr: u64, value: u32) -> Result<(), KioskError> {
    let status = Command::new("devmem")
        .arg(format!("{addr:#010x}"))
        .arg("32")
        .arg(format!("{value:#010x}"))
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(KioskError::Gpio(format!("devmem write to {addr:#010x} failed: {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_pins_from_data_register() {
        let map = ButtonMap::from_config(&ButtonConfig::default());
        let held = map.resolve(0b0000_0110);
        assert_eq!(held, ButtonSet::of(&[Button::Next, Button::Play]));
        assert!(!held.contains(Button::Stop));
    }

    #[test]
    fn active_low_inverts_levels() {
        let config = ButtonConfig {
            active_low: true,
            ..ButtonConfig::default()
        };
        let map = ButtonMap::from_config(&config);
        let held = map.resolve(!(1 << 4));
        assert_eq!(held, ButtonSet::of(&[Button::Stop]));
    }

    #[test]
    fn edges_report_each_press_once() {
        let mut edges = ButtonEdges::default();
        let play = ButtonSet::of(&[Button::Play]);
        assert_eq!(edges.update(play), play);
        assert!(edges.update(play).is_empty());
        assert!(edges.update(ButtonSet::EMPTY).is_empty());
        assert_eq!(edges.update(play), play);
    }

    fn anon_registers(offset: usize) -> Registers {
        let map = MmapOptions::new().len(PAGE_SIZE as usize).map_anon().unwrap();
        Registers::Mapped { map, offset }
    }

    #[test]
    fn setup_configures_pins_through_the_mapped_window() {
        let config = ButtonConfig::default();
        let mut gpio = GpioButtons::with_registers(anon_registers(0x890), &config).unwrap();
        // pins 1..=4 input (0), pin 0 output (1), other nibbles untouched
        assert_eq!(gpio.regs.read(0).unwrap(), 0x0000_0001);
        assert_eq!(gpio.regs.read(DATA_OFFSET).unwrap(), 0b1);

        gpio.regs.write(DATA_OFFSET, 0b1_0101).unwrap();
        assert_eq!(
            gpio.poll().unwrap(),
            ButtonSet::of(&[Button::Next, Button::Stop])
        );
    }

    #[test]
    fn set_mode_keeps_neighbouring_pins() {
        let config = ButtonConfig {
            enable_pin: None,
            ..ButtonConfig::default()
        };
        let mut regs = anon_registers(0);
        regs.write(0, 0x7777_7777).unwrap();
        let mut gpio = GpioButtons::with_registers(regs, &config).unwrap();
        assert_eq!(gpio.regs.read(0).unwrap(), 0x7770_0007);
        gpio.set_mode(9, MODE_OUTPUT).unwrap();
        assert_eq!(gpio.regs.read(4).unwrap(), 0x0000_0010);
    }

    #[test]
    fn register_outside_the_window_is_an_error() {
        let regs = anon_registers(PAGE_SIZE as usize - 4);
        assert!(regs.read(0).is_ok());
        assert!(matches!(regs.read(4), Err(KioskError::Gpio(_))));
    }

    #[test]
    fn parses_devmem_hex() {
        assert_eq!(parse_devmem_output("0x0000001E\n"), Some(0x1E));
        assert_eq!(parse_devmem_output("ff"), Some(0xFF));
        assert_eq!(parse_devmem_output(""), None);
    }

    #[test]
    fn scripted_buttons_drain_then_idle() {
        let mut pad = ScriptedButtons::new([ButtonSet::of(&[Button::Next])]);
        assert!(pad.poll().unwrap().contains(Button::Next));
        assert!(pad.poll().unwrap().is_empty());
        assert_eq!(pad.remaining(), 0);
    }
}
