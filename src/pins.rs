//! GPIO / peripheral pin assignments for the EnvNode main board.
//!
//! Single source of truth — every driver references this module rather
//! than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// User LED
// ---------------------------------------------------------------------------

/// Digital output driving the user feedback LED (active HIGH).
pub const USER_LED_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Sensor I2C bus (HTS221)
// ---------------------------------------------------------------------------

/// I2C SDA line shared by the on-board sensors.
pub const I2C_SDA_GPIO: i32 = 8;
/// I2C SCL line shared by the on-board sensors.
pub const I2C_SCL_GPIO: i32 = 9;
/// I2C port number used for the sensor bus.
pub const I2C_PORT: i32 = 0;
/// I2C bus clock (Hz). The HTS221 supports up to 400 kHz.
pub const I2C_FREQ_HZ: u32 = 100_000;
