//! Waveshare 2.13" V2 panel over SPI
//!
//! Wires the panel on the standard Raspberry Pi HAT pinout. Only compiled
//! with the `panel` feature since it drags in the Linux SPI and GPIO stack.

use epd_waveshare::epd2in13_v2::Epd2in13;
use epd_waveshare::prelude::*;
use linux_embedded_hal::{Delay, SpidevDevice, SysfsPin};
use tracing::{debug, info};

use crate::hardware::PanelDevice;
use crate::sink::SinkError;

/// HAT pinout (BCM numbering)
const BUSY_PIN: u64 = 24;
const DC_PIN: u64 = 25;
const RST_PIN: u64 = 17;

const SPI_DEVICE: &str = "/dev/spidev0.0";

/// The physical 2.13" panel
pub struct WaveshareDevice {
    spi: SpidevDevice,
    delay: Delay,
    epd: Epd2in13<SpidevDevice, SysfsPin, SysfsPin, SysfsPin, Delay>,
}

impl WaveshareDevice {
    /// Open the SPI bus, export the control pins and reset the panel
    ///
    /// # Errors
    ///
    /// Returns an error when the SPI device or a GPIO pin is unavailable,
    /// which usually means running on a host without the HAT.
    pub fn open() -> Result<Self, SinkError> {
        info!(spi = SPI_DEVICE, "Opening e-paper panel");

        let busy = init_gpio(BUSY_PIN, linux_embedded_hal::sysfs_gpio::Direction::In)?;
        let dc = init_gpio(DC_PIN, linux_embedded_hal::sysfs_gpio::Direction::Out)?;
        let rst = init_gpio(RST_PIN, linux_embedded_hal::sysfs_gpio::Direction::Out)?;

        let mut spi = SpidevDevice::open(SPI_DEVICE)
            .map_err(|e| SinkError::PanelIo(format!("open {SPI_DEVICE}: {e}")))?;

        let mut delay = Delay;
        let epd = Epd2in13::new(&mut spi, busy, dc, rst, &mut delay, None)
            .map_err(|e| SinkError::PanelIo(format!("panel reset: {e:?}")))?;

        Ok(Self { spi, delay, epd })
    }
}

impl PanelDevice for WaveshareDevice {
    fn init_fast(&mut self) -> Result<(), SinkError> {
        debug!("Waking panel");
        self.epd
            .wake_up(&mut self.spi, &mut self.delay)
            .map_err(|e| SinkError::PanelIo(format!("wake up: {e:?}")))
    }

    fn write_frame(&mut self, packed: &[u8]) -> Result<(), SinkError> {
        self.epd
            .update_frame(&mut self.spi, packed, &mut self.delay)
            .map_err(|e| SinkError::PanelIo(format!("update frame: {e:?}")))?;
        self.epd
            .display_frame(&mut self.spi, &mut self.delay)
            .map_err(|e| SinkError::PanelIo(format!("display frame: {e:?}")))
    }

    fn sleep(&mut self) -> Result<(), SinkError> {
        debug!("Panel entering deep sleep");
        self.epd
            .sleep(&mut self.spi, &mut self.delay)
            .map_err(|e| SinkError::PanelIo(format!("sleep: {e:?}")))
    }
}

fn init_gpio(
    pin: u64,
    direction: linux_embedded_hal::sysfs_gpio::Direction,
) -> Result<SysfsPin, SinkError> {
    let gpio = SysfsPin::new(pin);
    gpio.export()
        .map_err(|e| SinkError::PanelIo(format!("export gpio {pin}: {e}")))?;

    let mut attempts = 0;
    while !gpio.is_exported() {
        std::thread::sleep(std::time::Duration::from_millis(10));
        attempts += 1;
        if attempts > 100 {
            return Err(SinkError::PanelIo(format!("gpio {pin} never exported")));
        }
    }

    gpio.set_direction(direction)
        .map_err(|e| SinkError::PanelIo(format!("gpio {pin} direction: {e}")))?;

    if direction == linux_embedded_hal::sysfs_gpio::Direction::Out {
        gpio.set_value(1)
            .map_err(|e| SinkError::PanelIo(format!("gpio {pin} value: {e}")))?;
    }

    Ok(gpio)
}
