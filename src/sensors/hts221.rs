//! HTS221 relative-humidity / temperature sensor (ST).
//!
//! Sits on the sensor I2C bus at 0x5F. Output registers are raw signed
//! counts; the factory calibration block (0x30–0x3F) supplies the two
//! reference points for linear interpolation.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the bus via hw_init's I2C helpers.
//! On host/test: reads injected simulation values from statics.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU32, Ordering};

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

pub const I2C_ADDR: u8 = 0x5F;

#[cfg(target_os = "espidf")]
const WHO_AM_I: u8 = 0x0F;
#[cfg(target_os = "espidf")]
const WHO_AM_I_VALUE: u8 = 0xBC;
#[cfg(target_os = "espidf")]
const CTRL_REG1: u8 = 0x20;
/// PD=1 (active mode), BDU=1, ODR=1 Hz.
#[cfg(target_os = "espidf")]
const CTRL_REG1_ACTIVE: u8 = 0x85;
#[cfg(target_os = "espidf")]
const HUMIDITY_OUT_L: u8 = 0x28;
#[cfg(target_os = "espidf")]
const TEMP_OUT_L: u8 = 0x2A;
#[cfg(target_os = "espidf")]
const CALIB_START: u8 = 0x30;
/// MSB of the register address enables address auto-increment.
#[cfg(target_os = "espidf")]
const AUTO_INCREMENT: u8 = 0x80;

// ── Host simulation hooks ─────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_C: AtomicU32 = AtomicU32::new(21.0f32.to_bits());
#[cfg(not(target_os = "espidf"))]
static SIM_HUM_PCT: AtomicU32 = AtomicU32::new(40.0f32.to_bits());

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temperature(celsius: f32) {
    SIM_TEMP_C.store(celsius.to_bits(), Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_humidity(percent: f32) {
    SIM_HUM_PCT.store(percent.to_bits(), Ordering::Relaxed);
}

// ── Error type ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hts221Error {
    /// WHO_AM_I did not answer with the HTS221 signature.
    NotPresent,
    /// I2C transfer failed (ESP-IDF error code).
    Bus(i32),
}

impl core::fmt::Display for Hts221Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotPresent => write!(f, "HTS221 not present on bus"),
            Self::Bus(rc) => write!(f, "I2C transfer failed (rc={})", rc),
        }
    }
}

// ── Driver ────────────────────────────────────────────────────

pub struct Hts221 {
    #[cfg(target_os = "espidf")]
    calib: Calibration,
}

#[cfg(target_os = "espidf")]
#[derive(Debug, Clone, Copy)]
struct Calibration {
    t0_deg_c: f32,
    t1_deg_c: f32,
    t0_out: i16,
    t1_out: i16,
    h0_rh: f32,
    h1_rh: f32,
    h0_out: i16,
    h1_out: i16,
}

#[cfg(target_os = "espidf")]
impl Hts221 {
    /// Probe the sensor, switch it to active mode, and load the factory
    /// calibration block.
    pub fn power_on() -> Result<Self, Hts221Error> {
        let mut id = [0u8; 1];
        let ret = hw_init::i2c_read_regs(I2C_ADDR, WHO_AM_I, &mut id);
        if ret != 0 {
            return Err(Hts221Error::Bus(ret));
        }
        if id[0] != WHO_AM_I_VALUE {
            return Err(Hts221Error::NotPresent);
        }

        let ret = hw_init::i2c_write_reg(I2C_ADDR, CTRL_REG1, CTRL_REG1_ACTIVE);
        if ret != 0 {
            return Err(Hts221Error::Bus(ret));
        }

        let calib = read_calibration()?;
        info!("hts221: active, 1 Hz");
        Ok(Self { calib })
    }

    /// Latest (temperature °C, humidity %RH) pair, or `None` if the bus
    /// transfer failed.
    pub fn read(&mut self) -> Option<(f32, f32)> {
        let mut t = [0u8; 2];
        if hw_init::i2c_read_regs(I2C_ADDR, TEMP_OUT_L | AUTO_INCREMENT, &mut t) != 0 {
            return None;
        }
        let mut h = [0u8; 2];
        if hw_init::i2c_read_regs(I2C_ADDR, HUMIDITY_OUT_L | AUTO_INCREMENT, &mut h) != 0 {
            return None;
        }

        let t_out = i16::from_le_bytes(t);
        let h_out = i16::from_le_bytes(h);
        Some((
            self.calib.temperature_from(t_out),
            self.calib.humidity_from(h_out),
        ))
    }
}

#[cfg(target_os = "espidf")]
fn read_calibration() -> Result<Calibration, Hts221Error> {
    let mut raw = [0u8; 16];
    let ret = hw_init::i2c_read_regs(I2C_ADDR, CALIB_START | AUTO_INCREMENT, &mut raw);
    if ret != 0 {
        return Err(Hts221Error::Bus(ret));
    }

    // Register layout per datasheet table 19. T0/T1 are 10-bit values
    // split across 0x32/0x33 and the shared MSB register 0x35.
    let t0_msb = u16::from(raw[5] & 0x03);
    let t1_msb = u16::from((raw[5] >> 2) & 0x03);
    Ok(Calibration {
        t0_deg_c: f32::from((t0_msb << 8) | u16::from(raw[2])) / 8.0,
        t1_deg_c: f32::from((t1_msb << 8) | u16::from(raw[3])) / 8.0,
        t0_out: i16::from_le_bytes([raw[12], raw[13]]),
        t1_out: i16::from_le_bytes([raw[14], raw[15]]),
        h0_rh: f32::from(raw[0]) / 2.0,
        h1_rh: f32::from(raw[1]) / 2.0,
        h0_out: i16::from_le_bytes([raw[6], raw[7]]),
        h1_out: i16::from_le_bytes([raw[10], raw[11]]),
    })
}

#[cfg(target_os = "espidf")]
impl Calibration {
    fn temperature_from(&self, t_out: i16) -> f32 {
        let span = f32::from(self.t1_out) - f32::from(self.t0_out);
        if span == 0.0 {
            return self.t0_deg_c;
        }
        self.t0_deg_c
            + (self.t1_deg_c - self.t0_deg_c) * (f32::from(t_out) - f32::from(self.t0_out)) / span
    }

    fn humidity_from(&self, h_out: i16) -> f32 {
        let span = f32::from(self.h1_out) - f32::from(self.h0_out);
        if span == 0.0 {
            return self.h0_rh;
        }
        let rh = self.h0_rh
            + (self.h1_rh - self.h0_rh) * (f32::from(h_out) - f32::from(self.h0_out)) / span;
        rh.clamp(0.0, 100.0)
    }
}

#[cfg(not(target_os = "espidf"))]
impl Hts221 {
    pub fn power_on() -> Result<Self, Hts221Error> {
        Ok(Self {})
    }

    pub fn read(&mut self) -> Option<(f32, f32)> {
        Some((
            f32::from_bits(SIM_TEMP_C.load(Ordering::Relaxed)),
            f32::from_bits(SIM_HUM_PCT.load(Ordering::Relaxed)),
        ))
    }
}
