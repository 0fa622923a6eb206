//! One-shot hardware peripheral initialization.
//!
//! Configures the user-LED GPIO and the sensor I2C bus using raw
//! ESP-IDF sys calls. Called once from `main()` before the reporting
//! loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    I2cInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::I2cInitFailed(rc) => write!(f, "I2C init failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the reporting loop;
    // single-threaded at this point.
    unsafe {
        init_gpio_outputs()?;
        init_i2c()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::USER_LED_GPIO,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }
    let _ = unsafe { gpio_set_level(pins::USER_LED_GPIO, 0) };
    info!("hw_init: user LED on GPIO{}", pins::USER_LED_GPIO);
    Ok(())
}

/// Drive the user LED. No-op before `init_peripherals()` has run.
#[cfg(target_os = "espidf")]
pub fn led_set(on: bool) {
    let _ = unsafe { gpio_set_level(pins::USER_LED_GPIO, u32::from(on)) };
}

#[cfg(not(target_os = "espidf"))]
pub fn led_set(_on: bool) {}

// ── Sensor I2C bus ────────────────────────────────────────────

#[cfg(target_os = "espidf")]
const I2C_TIMEOUT_TICKS: u32 = 100;

#[cfg(target_os = "espidf")]
unsafe fn init_i2c() -> Result<(), HwInitError> {
    let cfg = i2c_config_t {
        mode: i2c_mode_t_I2C_MODE_MASTER,
        sda_io_num: pins::I2C_SDA_GPIO,
        scl_io_num: pins::I2C_SCL_GPIO,
        sda_pullup_en: true,
        scl_pullup_en: true,
        __bindgen_anon_1: i2c_config_t__bindgen_ty_1 {
            master: i2c_config_t__bindgen_ty_1__bindgen_ty_1 {
                clk_speed: pins::I2C_FREQ_HZ,
            },
        },
        ..Default::default()
    };

    let ret = unsafe { i2c_param_config(pins::I2C_PORT, &cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::I2cInitFailed(ret));
    }
    let ret = unsafe { i2c_driver_install(pins::I2C_PORT, i2c_mode_t_I2C_MODE_MASTER, 0, 0, 0) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::I2cInitFailed(ret));
    }
    info!(
        "hw_init: I2C{} on SDA={} SCL={}",
        pins::I2C_PORT,
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO
    );
    Ok(())
}

/// Write one register on an I2C device. Returns the ESP-IDF error code
/// (0 = OK).
#[cfg(target_os = "espidf")]
pub fn i2c_write_reg(addr: u8, reg: u8, value: u8) -> i32 {
    let buf = [reg, value];
    unsafe {
        i2c_master_write_to_device(
            pins::I2C_PORT,
            addr,
            buf.as_ptr(),
            buf.len(),
            I2C_TIMEOUT_TICKS,
        )
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn i2c_write_reg(_addr: u8, _reg: u8, _value: u8) -> i32 {
    0
}

/// Read consecutive registers starting at `start_reg` into `buf`.
/// Returns the ESP-IDF error code (0 = OK).
#[cfg(target_os = "espidf")]
pub fn i2c_read_regs(addr: u8, start_reg: u8, buf: &mut [u8]) -> i32 {
    let reg = [start_reg];
    unsafe {
        i2c_master_write_read_device(
            pins::I2C_PORT,
            addr,
            reg.as_ptr(),
            reg.len(),
            buf.as_mut_ptr(),
            buf.len(),
            I2C_TIMEOUT_TICKS,
        )
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn i2c_read_regs(_addr: u8, _start_reg: u8, buf: &mut [u8]) -> i32 {
    buf.fill(0);
    0
}
