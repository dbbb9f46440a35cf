//! Validation of the rest of the configuration form:
//! the GNSS receiver, its output messages, the NTRIP server and the logging limits.

use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    base::BaseConfig,
    errors::FieldError,
    validate::{check_length, check_range, Validate},
};

const MEASUREMENT_RATE_HZ: RangeInclusive<f64> = 0.1..=10.0;
const MESSAGE_RATE: RangeInclusive<u8> = 0..=20;
const NTRIP_TEXT: RangeInclusive<usize> = 1..=30;
const NTRIP_WIFI_PASSWORD: RangeInclusive<usize> = 0..=30;
const NTRIP_PORT: RangeInclusive<u32> = 1..=99_999;
const LOG_MINUTES: RangeInclusive<u32> = 1..=2_880;

/// The output messages of the receiver which rates are configurable,
/// in the order of the form
pub const MESSAGE_IDS: &[&str] = &[
    "UBX_NMEA_DTM",
    "UBX_NMEA_GBS",
    "UBX_NMEA_GGA",
    "UBX_NMEA_GLL",
    "UBX_NMEA_GNS",
    "UBX_NMEA_GRS",
    "UBX_NMEA_GSA",
    "UBX_NMEA_GST",
    "UBX_NMEA_GSV",
    "UBX_NMEA_RMC",
    "UBX_NMEA_VLW",
    "UBX_NMEA_VTG",
    "UBX_NMEA_ZDA",
    "UBX_NAV_ATT",
    "UBX_NAV_CLOCK",
    "UBX_NAV_DOP",
    "UBX_NAV_EOE",
    "UBX_NAV_GEOFENCE",
    "UBX_NAV_HPPOSECEF",
    "UBX_NAV_HPPOSLLH",
    "UBX_NAV_ODO",
    "UBX_NAV_ORB",
    "UBX_NAV_POSECEF",
    "UBX_NAV_POSLLH",
    "UBX_NAV_PVT",
    "UBX_NAV_RELPOSNED",
    "UBX_NAV_SAT",
    "UBX_NAV_SIG",
    "UBX_NAV_STATUS",
    "UBX_NAV_SVIN",
    "UBX_NAV_TIMEBDS",
    "UBX_NAV_TIMEGAL",
    "UBX_NAV_TIMEGLO",
    "UBX_NAV_TIMEGPS",
    "UBX_NAV_TIMELS",
    "UBX_NAV_TIMEUTC",
    "UBX_NAV_VELECEF",
    "UBX_NAV_VELNED",
    "UBX_RXM_MEASX",
    "UBX_RXM_RAWX",
    "UBX_RXM_RLM",
    "UBX_RXM_RTCM",
    "UBX_RXM_SFRBX",
    "UBX_MON_COMMS",
    "UBX_MON_HW2",
    "UBX_MON_HW3",
    "UBX_MON_HW",
    "UBX_MON_IO",
    "UBX_MON_MSGPP",
    "UBX_MON_RF",
    "UBX_MON_RXBUF",
    "UBX_MON_RXR",
    "UBX_MON_TXBUF",
    "UBX_TIM_TM2",
    "UBX_TIM_TP",
    "UBX_TIM_VRFY",
    "UBX_RTCM_1005",
    "UBX_RTCM_1074",
    "UBX_RTCM_1077",
    "UBX_RTCM_1084",
    "UBX_RTCM_1087",
    "UBX_RTCM_1094",
    "UBX_RTCM_1097",
    "UBX_RTCM_1124",
    "UBX_RTCM_1127",
    "UBX_RTCM_1230",
    "UBX_RTCM_4072_0",
    "UBX_RTCM_4072_1",
    "UBX_ESF_MEAS",
    "UBX_ESF_RAW",
    "UBX_ESF_STATUS",
    "UBX_ESF_ALG",
    "UBX_ESF_INS",
];

/// The satellite systems the receiver tracks
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constellations {
    /// GPS (USA)
    pub gps: bool,
    /// Galileo (EU)
    pub galileo: bool,
    /// BeiDou (China)
    pub beidou: bool,
    /// GLONASS (Russia)
    pub glonass: bool,
}

impl Constellations {
    /// Is any system enabled
    pub fn any(self) -> bool {
        self.gps || self.galileo || self.beidou || self.glonass
    }
}

/// How often the message is produced: every N-th navigation solution, 0 disables it
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MessageRate {
    /// One of the [`MESSAGE_IDS`]
    pub id: &'static str,
    /// Solutions per message
    pub rate: u8,
}

/// The receiver settings
#[derive(Debug, Clone, PartialEq)]
pub struct GnssConfig {
    /// Navigation solutions per second
    pub measurement_rate_hz: f64,
    /// Tracked satellite systems
    pub constellations: Constellations,
    /// The rates of the output messages
    pub messages: Vec<MessageRate>,
}

impl GnssConfig {
    /// The configuration with every known message disabled
    pub fn with_messages_disabled(measurement_rate_hz: f64, constellations: Constellations) -> Self {
        let messages = MESSAGE_IDS
            .iter()
            .map(|&id| MessageRate { id, rate: 0 })
            .collect();
        Self {
            measurement_rate_hz,
            constellations,
            messages,
        }
    }

    /// Change the rate of the message, returns `false` if the message is not in the list
    pub fn set_message_rate(&mut self, id: &str, rate: u8) -> bool {
        self.messages
            .iter_mut()
            .find(|msg| msg.id == id)
            .map(|msg| msg.rate = rate)
            .is_some()
    }
}

impl Validate for GnssConfig {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_range(
            &mut errors,
            "measurementRateHz",
            self.measurement_rate_hz,
            &MEASUREMENT_RATE_HZ,
            "Must be between 0 and 10Hz",
        );

        if !self.constellations.any() {
            errors.push(FieldError {
                field: "ubxConstellations",
                message: "Please choose one constellation",
            });
        }

        for msg in &self.messages {
            check_range(
                &mut errors,
                msg.id,
                msg.rate,
                &MESSAGE_RATE,
                "Must be between 0 and 20",
            );
        }
        errors
    }
}

/// The credentials to push the base corrections to an NTRIP caster
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NtripServer {
    /// The network the base joins
    pub wifi_ssid: String,
    /// The network password, can be empty for open networks
    pub wifi_password: String,
    /// The caster host name
    pub caster_host: String,
    /// The caster TCP port
    pub caster_port: u32,
    /// The mount point the corrections are published on
    pub mount_point: String,
    /// The password of the mount point
    pub mount_point_password: String,
}

impl Validate for NtripServer {
    fn field_errors(&self) -> Vec<FieldError> {
        let text_error = "Must be 1 to 30 characters";
        let mut errors = Vec::new();
        check_length(
            &mut errors,
            "ntripServer_wifiSSID",
            &self.wifi_ssid,
            &NTRIP_TEXT,
            text_error,
        );
        check_length(
            &mut errors,
            "ntripServer_wifiPW",
            &self.wifi_password,
            &NTRIP_WIFI_PASSWORD,
            "Must be 0 to 30 characters",
        );
        check_length(
            &mut errors,
            "ntripServer_CasterHost",
            &self.caster_host,
            &NTRIP_TEXT,
            text_error,
        );
        check_range(
            &mut errors,
            "ntripServer_CasterPort",
            self.caster_port,
            &NTRIP_PORT,
            "Must be 1 to 99999",
        );
        check_length(
            &mut errors,
            "ntripServer_MountPoint",
            &self.mount_point,
            &NTRIP_TEXT,
            text_error,
        );
        check_length(
            &mut errors,
            "ntripServer_MountPointPW",
            &self.mount_point_password,
            &NTRIP_TEXT,
            text_error,
        );
        errors
    }
}

/// When a log file is closed and the next one is started
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoggingConfig {
    /// Stop logging after this time
    pub max_log_time_minutes: u32,
    /// Start a new file after this time
    pub max_log_length_minutes: u32,
}

impl Validate for LoggingConfig {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_range(
            &mut errors,
            "maxLogTime_minutes",
            self.max_log_time_minutes,
            &LOG_MINUTES,
            "Must be 1 to 2880",
        );
        check_range(
            &mut errors,
            "maxLogLength_minutes",
            self.max_log_length_minutes,
            &LOG_MINUTES,
            "Must be 1 to 2880",
        );
        errors
    }
}

/// The whole configuration form, checked section by section before saving
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigForm {
    /// GNSS section with the message rates
    pub gnss: GnssConfig,
    /// Base section
    pub base: BaseConfig,
    /// NTRIP server part of the base section
    pub ntrip_server: NtripServer,
    /// System section
    pub logging: LoggingConfig,
}

impl Validate for ConfigForm {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = self.gnss.field_errors();
        errors.extend(self.base.field_errors());
        errors.extend(self.ntrip_server.field_errors());
        errors.extend(self.logging.field_errors());
        errors
    }
}
