//! Static lookup tables for payload interpretation
//!
//! Pure data: destination and status texts for banknote records, the
//! ordered 60-entry device-status flag table, and the banknote-transport
//! sub-code table. Nothing here is ever mutated at runtime.
//!
//! The flag table is a fixed array, not a map: active-error reporting
//! depends on iteration matching the device's flag order.

/// Descriptor for one device-status flag
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlagDescriptor {
    /// Symbolic flag name
    pub name: &'static str,
    /// Monitored component
    pub description: &'static str,
    /// Meaning of a raised flag; empty for reserved entries, which never
    /// register as active regardless of value
    pub active_meaning: &'static str,
    /// Device-series applicability
    pub scope: &'static str,
    /// Marks the banknote-transport flag, whose value is a sub-code
    /// rather than a boolean
    pub is_special: bool,
}

const fn flag(
    name: &'static str,
    description: &'static str,
    active_meaning: &'static str,
    scope: &'static str,
) -> FlagDescriptor {
    FlagDescriptor {
        name,
        description,
        active_meaning,
        scope,
        is_special: false,
    }
}

const fn reserved(name: &'static str) -> FlagDescriptor {
    flag(name, "Reserved", "", "")
}

const KDS: &str = "KDS series only";
const KD: &str = "KD series only";
const KD_CASSETTE: &str = "KD series, cassette only";
const KR10: &str = "KR10 series only";
const COMMON: &str = "Common";

/// Device-status flag descriptors, index 0-59 in device flag order;
/// the banknote-transport failure flag sits at index 32
pub(crate) const ERROR_FLAG_TABLE: [FlagDescriptor; 60] = [
    flag("reverse_motor", "Reverse motor", "Failure", KDS),
    flag("insert_motor", "Insert motor", "Failure", KDS),
    flag("main_trans_motor", "Main transport motor", "Failure", COMMON),
    flag("insert_pusher", "Insert pusher", "Failure", KDS),
    flag("reject_shutter", "Reject shutter", "Failure", KDS),
    flag("rail_switch", "Rail switch", "Open", COMMON),
    flag("hopper_sensor", "Hopper sensor", "Signal detected", COMMON),
    flag("interval_control_sensor", "Interval control sensor", "Signal detected", KDS),
    flag("insert_sensor", "Insert sensor", "Signal detected", COMMON),
    flag("sepa_sensor", "SEPA sensor", "Signal detected", COMMON),
    flag("reject_counter_sensor", "Reject counter sensor", "Signal detected", COMMON),
    flag("deposit_counter_sensor", "Deposit counter sensor", "Signal detected", COMMON),
    flag("reject_pocket_sensor1", "Reject pocket sensor 1 (inner)", "Signal detected", COMMON),
    flag("reject_pocket_sensor2", "Reject pocket sensor 2 (outer)", "Signal detected", KDS),
    flag("upper_interface_board_connect", "Upper interface board connection", "Failure", KDS),
    flag("reco_communication", "Recognition unit communication", "Failure", COMMON),
    flag("fpga_communication", "FPGA communication", "Failure", COMMON),
    flag("hsc_communication", "HSC communication", "Failure", KDS),
    flag("safebox_trans_motor", "Safebox transport motor", "Failure", KDS),
    flag("safebox_door_switch", "Safebox door switch", "Open", COMMON),
    flag("safebox_deposit_counter_sensor", "Safebox deposit counter sensor", "Signal detected", KDS),
    flag("safebox_full_sensor", "Safebox full sensor", "Full", COMMON),
    flag("heatsealing_module", "Heat-sealing module or envelope motor", "Failure", KDS),
    flag("heatsealing_module_rail_switch", "Heat-sealing module rail switch", "Open", KDS),
    flag("canvas_bag_switch", "Canvas bag switch or vinyl bag detection sensor", "Open", COMMON),
    flag("envelope_deposit", "Envelope deposit (canvas bag)", "Failure", KDS),
    flag("insert_pusher_up_sensor", "Insert pusher up-position sensor", "Failure", KDS),
    flag("insert_pusher_down_sensor", "Insert pusher down-position sensor", "Failure", KDS),
    flag("reject_shutter_open_sensor", "Reject shutter open sensor", "Failure", KDS),
    flag("reject_shutter_close_sensor", "Reject shutter close sensor", "Failure", KDS),
    flag("insert_motor_check_sensor", "Insert motor check sensor", "Failure", KDS),
    flag("main_trans_motor_check_sensor", "Main transport motor check sensor", "Failure", KDS),
    FlagDescriptor {
        name: "banknote_trans_fail",
        description: "Banknote transport failure",
        active_meaning: "Failure",
        scope: COMMON,
        is_special: true,
    },
    flag("cassette_pusher_error", "Cassette pusher", "Failure", KD_CASSETTE),
    flag("jam_sensor", "Jam sensor", "Signal detected", KD),
    flag("enter_sensor", "Entry sensor", "Signal detected", KD),
    flag("cassette_count_sensor", "Cassette count sensor", "Failure", KD_CASSETTE),
    flag("cassette_banknote_stay_error", "Banknote stay in cassette", "Failure", KD_CASSETTE),
    flag("l_path_sensor", "L-path sensor", "Failure", KR10),
    flag("l_jam1_sensor", "L-jam sensor 1", "Failure", KR10),
    flag("l_jam2_sensor", "L-jam sensor 2", "Failure", KR10),
    flag("l_jam3_sensor", "L-jam sensor 3", "Failure", KR10),
    flag("drum1_sensor", "Drum 1 sensor", "Failure", KR10),
    flag("drum2_sensor", "Drum 2 sensor", "Failure", KR10),
    flag("drum3_sensor", "Drum 3 sensor", "Failure", KR10),
    flag("drum4_sensor", "Drum 4 sensor", "Failure", KR10),
    flag("l_door_switch", "L-door switch", "Open", KR10),
    flag("l_rail_switch", "L-rail switch", "Open", KR10),
    flag("drum1_full_pi", "Drum 1 full indicator", "Failure", KR10),
    flag("drum2_full_pi", "Drum 2 full indicator", "Failure", KR10),
    flag("drum3_full_pi", "Drum 3 full indicator", "Failure", KR10),
    flag("drum4_full_pi", "Drum 4 full indicator", "Failure", KR10),
    reserved("reserved1"),
    reserved("reserved2"),
    reserved("reserved3"),
    reserved("reserved4"),
    reserved("reserved5"),
    reserved("reserved6"),
    reserved("reserved7"),
    reserved("reserved8"),
];

/// Banknote destination name (item records and count reports)
pub(crate) fn destination_text(code: u8) -> &'static str {
    match code {
        0 => "Reject",
        1 => "Cassette",
        2 => "Drum1",
        3 => "Drum2",
        4 => "Drum3",
        5 => "Drum4",
        _ => "unknown",
    }
}

/// Status/rejection reason for an item record's status code
pub(crate) fn status_text(code: u8) -> &'static str {
    match code {
        0 => "No error",
        1 => "Recognition failure",
        2 => "Reject result - SC option",
        3 => "Reject result - recognition information lost",
        4 => "Reject result - chain",
        5 => "Reject result - oversize",
        6 => "Reject result - wrong stacker",
        7 => "Reject result - batch amount full",
        8 => "Reject result - denomination counter full",
        9 => "Reject result - banknote denomination mismatch",
        _ => "unknown status",
    }
}

/// Sub-code text for the banknote-transport failure flag
pub(crate) fn transport_failure_text(value: u8) -> String {
    let text = match value {
        0 => "No error",
        1 => "BID mismatch error",
        2 => "Wrong stacker error (upper module separator)",
        3 => "Banknote tear error",
        4 => "Double chain error",
        5 => "Dark chain error",
        6 => "White chain error",
        7 => "Insertion error",
        8 => "Batch amount full",
        0x10 => "Wrong stacker error on reject (dispense)",
        0x11 => "Wrong stacker error on cassette",
        0x12 => "Wrong stacker error on drum 1",
        0x13 => "Wrong stacker error on drum 2",
        0x14 => "Wrong stacker error on drum 3",
        0x15 => "Wrong stacker error on drum 4",
        other => return format!("unknown error code: {}", other),
    };
    text.to_string()
}
