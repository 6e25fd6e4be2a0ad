//! Topic suffix table of the Venus OS data model.
//!
//! Maps the path part of a `N/<portal_id>/<type>/<id>/<path>` topic to the
//! metric it feeds. Paths not listed here are not exported.

use crate::registry::MetricDefinition;

const ALARM_HELP: &str = "0=OK; 1=Warning; 2=Alarm";

macro_rules! alarm {
    ($alarm_type:literal) => {
        MetricDefinition::gauge("alarm", ALARM_HELP).with_labels(&[("alarm_type", $alarm_type)])
    };
}

macro_rules! phase_alarm {
    ($phase:literal, $alarm_type:literal) => {
        MetricDefinition::gauge("phase_alarm", ALARM_HELP)
            .with_labels(&[("phase", $phase), ("alarm_type", $alarm_type)])
    };
}

/// Exported topic suffixes and their metric definitions.
pub static TOPIC_TABLE: &[(&str, MetricDefinition)] = &[
    // system
    (
        "Ac/ActiveIn/Source",
        MetricDefinition::gauge("ac_activein_source", "The active AC-In source of the multi"),
    ),
    (
        "Ac/Consumption/NumberOfPhases",
        MetricDefinition::gauge("ac_consumption_number_of_phases", ""),
    ),
    (
        "Ac/Consumption/L1/Power",
        MetricDefinition::gauge("ac_consumption_phase_power_watts", "Total of ConsumptionOnInput & ConsumptionOnOutput")
            .with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/Consumption/L2/Power",
        MetricDefinition::gauge("ac_consumption_phase_power_watts", "Total of ConsumptionOnInput & ConsumptionOnOutput")
            .with_labels(&[("phase", "2")]),
    ),
    (
        "Ac/Consumption/L3/Power",
        MetricDefinition::gauge("ac_consumption_phase_power_watts", "Total of ConsumptionOnInput & ConsumptionOnOutput")
            .with_labels(&[("phase", "3")]),
    ),
    (
        "Ac/ConsumptionOnInput/NumberOfPhases",
        MetricDefinition::gauge("ac_consumption_on_input_number_of_phases", ""),
    ),
    (
        "Ac/ConsumptionOnInput/L1/Power",
        MetricDefinition::gauge("ac_consumption_on_input_phase_power_watts", "W")
            .with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/ConsumptionOnInput/L2/Power",
        MetricDefinition::gauge("ac_consumption_on_input_phase_power_watts", "W")
            .with_labels(&[("phase", "2")]),
    ),
    (
        "Ac/ConsumptionOnInput/L3/Power",
        MetricDefinition::gauge("ac_consumption_on_input_phase_power_watts", "W")
            .with_labels(&[("phase", "3")]),
    ),
    (
        "Ac/ConsumptionOnOutput/NumberOfPhases",
        MetricDefinition::gauge("ac_consumption_on_output_number_of_phases", ""),
    ),
    (
        "Ac/ConsumptionOnOutput/L1/Power",
        MetricDefinition::gauge("ac_consumption_on_output_phase_power_watts", "W")
            .with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/ConsumptionOnOutput/L2/Power",
        MetricDefinition::gauge("ac_consumption_on_output_phase_power_watts", "W")
            .with_labels(&[("phase", "2")]),
    ),
    (
        "Ac/ConsumptionOnOutput/L3/Power",
        MetricDefinition::gauge("ac_consumption_on_output_phase_power_watts", "W")
            .with_labels(&[("phase", "3")]),
    ),
    (
        "Dc/Battery/Alarms/CircuitBreakerTripped",
        MetricDefinition::gauge("dc_battery_alarms_circuit_breaker_tripped", ""),
    ),
    ("Dc/Battery/ConsumedAmphours", MetricDefinition::gauge("dc_battery_consumed_amphours", "Ah")),
    ("Dc/Battery/Current", MetricDefinition::gauge("dc_battery_current", "")),
    ("Dc/Battery/Power", MetricDefinition::gauge("dc_battery_power_watts", "")),
    ("Dc/Battery/Soc", MetricDefinition::gauge("dc_battery_state_of_charge", "")),
    ("Dc/Battery/State", MetricDefinition::gauge("dc_battery_state", "")),
    ("Dc/Battery/TimeToGo", MetricDefinition::gauge("dc_battery_time_to_go_seconds", "")),
    ("Dc/Battery/Voltage", MetricDefinition::gauge("dc_battery_voltage_volts", "")),
    ("Dc/Charger/Power", MetricDefinition::gauge("dc_charger_power_watts", "")),
    ("Dc/Pv/Current", MetricDefinition::gauge("dc_pv_current_amps", "")),
    ("Dc/Pv/Power", MetricDefinition::gauge("dc_pv_power_watts", "")),
    ("Dc/System/Power", MetricDefinition::gauge("dc_system_power_watts", "")),
    ("Dc/Vebus/Current", MetricDefinition::gauge("dc_vebus_current_amps", "")),
    ("Dc/Vebus/Power", MetricDefinition::gauge("dc_vebus_power_watts", "")),
    ("Buzzer/State", MetricDefinition::gauge("buzzer_state", "")),
    ("Relay/0/State", MetricDefinition::gauge("relay_state", "").with_labels(&[("relay", "0")])),
    ("Relay/1/State", MetricDefinition::gauge("relay_state", "").with_labels(&[("relay", "1")])),
    ("SystemState/State", MetricDefinition::gauge("system_state", "")),
    ("Timers/TimeOnGrid", MetricDefinition::counter("time_on_grid_seconds", "Time spent on grid")),
    (
        "Timers/TimeOnGenerator",
        MetricDefinition::counter("time_on_generator_seconds", "Time spent on generator"),
    ),
    (
        "Timers/TimeOnInverter",
        MetricDefinition::counter("time_on_inverter_seconds", "Time spent on inverter"),
    ),
    ("Timers/TimeOff", MetricDefinition::counter("time_off_seconds", "Time spent off")),
    (
        "Settings/CGwacs/AcPowerSetPoint",
        MetricDefinition::gauge("settings_cgwacs_ac_power_set_point", "User setting: Grid set-point"),
    ),
    (
        "Settings/CGwacs/BatteryLife/DischargedSoc",
        MetricDefinition::gauge("settings_cgwacs_battery_life_discharged_state_of_charge", "Deprecated"),
    ),
    (
        "Settings/CGwacs/BatteryLife/DischargedTime",
        MetricDefinition::gauge("settings_cgwacs_battery_life_dischanged_time", "Internal"),
    ),
    (
        "Settings/CGwacs/BatteryLife/Flags",
        MetricDefinition::gauge("settings_cgwacs_battery_life_flags", "Internal"),
    ),
    (
        "Settings/CGwacs/BatteryLife/MinimumSocLimit",
        MetricDefinition::gauge("settings_cgwacs_battery_life_minimum_state_of_charge_limit", "User setting: Minimum Discharge SOC"),
    ),
    (
        "Settings/CGwacs/BatteryLife/SocLimit",
        MetricDefinition::gauge("settings_cgwacs_battery_life_state_of_charge_limit", "Output of the BatteryLife algorithm (read only)"),
    ),
    (
        "Settings/CGwacs/BatteryLife/State",
        MetricDefinition::gauge("settings_cgwacs_battery_life_state", "ESS state (read & write, see below)"),
    ),
    (
        "Settings/CGwacs/Hub4Mode",
        MetricDefinition::gauge("settings_cgwacs_hub4_mode", "ESS mode (read & write, see below)"),
    ),
    (
        "Settings/CGwacs/MaxChargePercentage",
        MetricDefinition::gauge("settings_cgwacs_max_charge_percentage", "Deprecated"),
    ),
    (
        "Settings/CGwacs/MaxChargePower",
        MetricDefinition::gauge("settings_cgwacs_max_charge_power_watts", "User setting: Max Charge Power"),
    ),
    (
        "Settings/CGwacs/MaxDischargePercentage",
        MetricDefinition::gauge("settings_cgwacs_max_discharge_percentage", "Deprecated"),
    ),
    (
        "Settings/CGwacs/MaxDischargePower",
        MetricDefinition::gauge("settings_cgwacs_max_discharge_power_watts", "User setting: Max Inverter Power"),
    ),
    (
        "Settings/CGwacs/OvervoltageFeedIn",
        MetricDefinition::gauge("settings_cgwacs_overvoltage_feed_in", "User setting: Feed-in excess solar charger power (yes/no)"),
    ),
    (
        "Settings/CGwacs/PreventFeedback",
        MetricDefinition::gauge("settings_cgwacs_prevent_feedback", "User setting: PV Inverter Zero Feed-in (on/off)"),
    ),
    (
        "Settings/CGwacs/RunWithoutGridMeter",
        MetricDefinition::gauge("settings_cgwacs_run_without_grid_meter", "User setting: Grid meter installed (on/off)"),
    ),
    // vebus
    (
        "Ac/ActiveIn/L1/F",
        MetricDefinition::gauge("ac_active_input_phase__freq_hz", "Frequency")
            .with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/ActiveIn/L1/I",
        MetricDefinition::gauge("ac_active_input_phase_current_amps", "Current")
            .with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/ActiveIn/L1/P",
        MetricDefinition::gauge("ac_active_input_phase_power_watts", "Real power")
            .with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/ActiveIn/L1/V",
        MetricDefinition::gauge("ac_active_input_phase_voltage_volts", "")
            .with_labels(&[("phase", "1")]),
    ),
    ("Ac/ActiveIn/P", MetricDefinition::gauge("ac_active_input_power_watts", "Total power")),
    (
        "Ac/ActiveIn/Connected",
        MetricDefinition::gauge("ac_active_input_connected", "0 when inverting, 1 when connected to an AC in."),
    ),
    (
        "Ac/ActiveIn/ActiveInput",
        MetricDefinition::gauge("ac_active_input_active_input", "Active input: 0 = ACin-1, 1 = ACin-2, 240 is none (inverting)."),
    ),
    (
        "Ac/In/1/CurrentLimit",
        MetricDefinition::gauge("ac_input_current_limit", "").with_labels(&[("input", "1")]),
    ),
    (
        "Ac/In/1/CurrentLimitIsAdjustable",
        MetricDefinition::gauge("ac_input_current_limit_is_adjustable", "")
            .with_labels(&[("input", "1")]),
    ),
    (
        "Ac/In/2/CurrentLimit",
        MetricDefinition::gauge("ac_input_current_limit", "").with_labels(&[("input", "2")]),
    ),
    (
        "Ac/In/2/CurrentLimitIsAdjustable",
        MetricDefinition::gauge("ac_input_current_limit_is_adjustable", "")
            .with_labels(&[("input", "2")]),
    ),
    (
        "Ac/PowerMeasurementType",
        MetricDefinition::gauge("ac_power_measurement_type", "Indicates the type of power measurement used by the system."),
    ),
    ("Alarms/LowBattery", alarm!("LowBattery")),
    ("Alarms/PhaseRotation", alarm!("PhaseRotation")),
    ("Alarms/Ripple", alarm!("Ripple")),
    ("Alarms/TemperatureSensor", alarm!("TemperatureSensor")),
    ("Alarms/L1/HighTemperature", phase_alarm!("1", "HighTemperature")),
    ("Alarms/L1/LowBattery", phase_alarm!("1", "LowBattery")),
    ("Alarms/L1/Overload", phase_alarm!("1", "Overload")),
    ("Alarms/L1/Ripple", phase_alarm!("1", "Ripple")),
    ("Alarms/L2/HighTemperature", phase_alarm!("2", "HighTemperature")),
    ("Alarms/L2/LowBattery", phase_alarm!("2", "LowBattery")),
    ("Alarms/L2/Overload", phase_alarm!("2", "Overload")),
    ("Alarms/L2/Ripple", phase_alarm!("2", "Ripple")),
    ("Alarms/L3/HighTemperature", phase_alarm!("3", "HighTemperature")),
    ("Alarms/L3/LowBattery", phase_alarm!("3", "LowBattery")),
    ("Alarms/L3/Overload", phase_alarm!("3", "Overload")),
    ("Alarms/L3/Ripple", phase_alarm!("3", "Ripple")),
    (
        "Dc/0/Voltage",
        MetricDefinition::gauge("dc_voltage_volts", "V DC").with_labels(&[("n", "0")]),
    ),
    ("Dc/0/Current", MetricDefinition::gauge("dc_current_amps", "A DC").with_labels(&[("n", "0")])),
    ("Dc/0/Power", MetricDefinition::gauge("dc_power_watts", "").with_labels(&[("n", "0")])),
    (
        "Dc/0/Temperature",
        MetricDefinition::gauge("dc_temperature_celcius", "°C - Battery temperature")
            .with_labels(&[("n", "0")]),
    ),
    (
        "Mode",
        MetricDefinition::gauge("mode", "Position of the switch. 1=Charger Only;2=Inverter Only;3=On;4=Off"),
    ),
    ("ModeIsAdjustable", MetricDefinition::gauge("mode_is_adjustable", "")),
    (
        "VebusChargeState",
        MetricDefinition::gauge("vebus_charge_state", "1. Bulk, 2. Absorption, 3. Float, 4. Storage, 5. Repeat absorption, 6. Forced absorption, 7. Equalise, 8. Bulk stopped"),
    ),
    (
        "VebusSetChargeState",
        MetricDefinition::gauge("vebus_set_charge_state", "1. Force to Equalise. 2. Force to Absorption, for maximum absorption time. 3. Force to Float, for 24 hours."),
    ),
    (
        "Leds/Mains",
        MetricDefinition::gauge("led_mains", "0 = Off, 1 = On, 2 = Blinking, 3 = Blinking inverted"),
    ),
    (
        "Leds/Bulk",
        MetricDefinition::gauge("led_bulk", "0 = Off, 1 = On, 2 = Blinking, 3 = Blinking inverted"),
    ),
    (
        "Leds/Absorption",
        MetricDefinition::gauge("led_absoption", "0 = Off, 1 = On, 2 = Blinking, 3 = Blinking inverted"),
    ),
    (
        "Leds/Float",
        MetricDefinition::gauge("led_float", "0 = Off, 1 = On, 2 = Blinking, 3 = Blinking inverted"),
    ),
    (
        "Leds/Inverter",
        MetricDefinition::gauge("led_inverter", "0 = Off, 1 = On, 2 = Blinking, 3 = Blinking inverted"),
    ),
    (
        "Leds/Overload",
        MetricDefinition::gauge("led_overload", "0 = Off, 1 = On, 2 = Blinking, 3 = Blinking inverted"),
    ),
    (
        "Leds/LowBattery",
        MetricDefinition::gauge("led_low_battery", "0 = Off, 1 = On, 2 = Blinking, 3 = Blinking inverted"),
    ),
    (
        "Leds/Temperature",
        MetricDefinition::gauge("led_temperature", "0 = Off, 1 = On, 2 = Blinking, 3 = Blinking inverted"),
    ),
    // inverter
    ("Alarms/LowVoltage", alarm!("LowVoltage")),
    ("Alarms/HighVoltage", alarm!("HighVoltage")),
    ("Alarms/LowTemperature", alarm!("LowTemperature")),
    ("Alarms/HighTemperature", alarm!("HighTemperature")),
    ("Alarms/Overload", alarm!("Overload")),
    ("Alarms/LowVoltageAcOut", alarm!("LowVoltageAcOut")),
    ("Alarms/HighVoltageAcOut", alarm!("HighVoltageAcOut")),
    ("Ac/Out/P", MetricDefinition::gauge("ac_output_power_watts", "AC Output power watts")),
    (
        "Ac/Out/L1/V",
        MetricDefinition::gauge("ac_output_phase_volts", "AC Output voltage")
            .with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/Out/L1/I",
        MetricDefinition::gauge("ac_output_phase_current_amps", "AC Output current")
            .with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/Out/L1/F",
        MetricDefinition::gauge("ac_output_phase_freq_hz", "AC Output frequency Hertz")
            .with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/Out/L1/P",
        MetricDefinition::gauge("ac_output_phase_power_watts", "Not used on vedirect inverters ")
            .with_labels(&[("phase", "1")]),
    ),
    ("State", MetricDefinition::gauge("state", "")),
    (
        "Dc/0/MidVoltage",
        MetricDefinition::gauge("dc_midvoltage_volts", "V DC Mid voltage (BMV-702 configured to read midpoint voltage only)")
            .with_labels(&[("n", "0")]),
    ),
    (
        "Dc/0/MidVoltageDeviation",
        MetricDefinition::gauge("dc_midvoltage_deviation_percent", "Percentage deviation")
            .with_labels(&[("n", "0")]),
    ),
    (
        "Dc/1/Voltage",
        MetricDefinition::gauge("dc_voltage_volts", "V DC").with_labels(&[("n", "1")]),
    ),
    ("ConsumedAmphours", MetricDefinition::gauge("consumed_amphours", "Ah")),
    ("Soc", MetricDefinition::gauge("state_of_charge", "0 to 100 % (BMV, BYD, Lynx BMS)")),
    (
        "TimeToGo",
        MetricDefinition::gauge("time_to_go_seconds", "Time to in seconds (BMV SOC relay/discharge floor value, Lynx BMS).  Max value 864,000 when battery is not discharging."),
    ),
    (
        "Info/MaxChargeCurrent",
        MetricDefinition::gauge("max_charge_current_amps", "Charge Current Limit aka CCL  (BYD, Lynx BMS and FreedomWon)"),
    ),
    (
        "Info/MaxDischargeCurrent",
        MetricDefinition::gauge("max_discharge_current_amps", "Discharge Current Limit aka DCL (BYD, Lynx BMS and FreedomWon)"),
    ),
    (
        "Info/MaxChargeVoltage",
        MetricDefinition::gauge("max_charge_voltage_volts", "Maximum voltage to charge to (BYD, Lynx BMS and FreedomWon)"),
    ),
    (
        "Info/BatteryLowVoltage",
        MetricDefinition::gauge("battery_low_voltage", "Note that Low Voltage is ignored by the system (BYD, Lynx BMS and FreedomWon)"),
    ),
    ("Ac/Alarms/GridLost", alarm!("GridLost")),
    ("Alarms/Alarm", alarm!("Alarm")),
    ("Alarms/LowStarterVoltage", alarm!("LowStarterVoltage")),
    ("Alarms/HighStarterVoltage", alarm!("HighStarterVoltage")),
    ("Alarms/LowSoc", alarm!("LowSoc")),
    ("Alarms/HighChargeCurrent", alarm!("HighChargeCurrent")),
    ("Alarms/HighDischargeCurrent", alarm!("HighDischargeCurrent")),
    ("Alarms/CellImbalance", alarm!("CellImbalance")),
    ("Alarms/InternalFailure", alarm!("InternalFailure")),
    ("Alarms/HighChargeTemperature", alarm!("HighChargeTemperature")),
    ("Alarms/LowChargeTemperature", alarm!("LowChargeTemperature")),
    ("Alarms/LowCellVoltage", alarm!("LowCellVoltage")),
    ("Alarms/MidVoltage", alarm!("MidVoltage")),
    ("Settings/HasTemperature", MetricDefinition::gauge("settings_has_temperature", "")),
    ("Settings/HasStarterVoltage", MetricDefinition::gauge("settings_has_starter_voltage", "")),
    ("Settings/HasMidVoltage", MetricDefinition::gauge("settings_has_mid_voltage", "")),
    ("History/DeepestDischarge", MetricDefinition::gauge("history_deepest_discharge", "")),
    ("History/LastDischarge", MetricDefinition::gauge("history_last_discharge", "")),
    ("History/AverageDischarge", MetricDefinition::gauge("history_avg_discharge", "")),
    ("History/ChargeCycles", MetricDefinition::gauge("history_charge_cycles", "")),
    ("History/FullDischarges", MetricDefinition::gauge("history_full_discharges", "")),
    ("History/TotalAhDrawn", MetricDefinition::gauge("history_total_drawn_amphours", "")),
    ("History/MinimumVoltage", MetricDefinition::gauge("history_min_voltage_volts", "")),
    ("History/MaximumVoltage", MetricDefinition::gauge("history_max_voltage_volts", "")),
    (
        "History/TimeSinceLastFullCharge",
        MetricDefinition::gauge("history_time_since_full_charge_seconds", ""),
    ),
    ("History/AutomaticSyncs", MetricDefinition::gauge("history_automatic_syncs", "")),
    ("History/LowVoltageAlarms", MetricDefinition::gauge("history_low_voltage_alarms", "")),
    ("History/HighVoltageAlarms", MetricDefinition::gauge("history_high_voltage_alarms", "")),
    (
        "History/LowStarterVoltageAlarms",
        MetricDefinition::gauge("history_low_starter_voltage_alarms", ""),
    ),
    (
        "History/HighStarterVoltageAlarms",
        MetricDefinition::gauge("history_high_starter_voltage_alarms", ""),
    ),
    ("History/MinimumStarterVoltage", MetricDefinition::gauge("history_min_starter_voltage", "")),
    ("History/MaximumStarterVoltage", MetricDefinition::gauge("history_max_starter_voltage", "")),
    ("History/DischargedEnergy", MetricDefinition::gauge("history_discharge_energy_kwh", "")),
    ("History/ChargedEnergy", MetricDefinition::gauge("history_charged_energy_kwh", "")),
    ("ErrorCode", MetricDefinition::gauge("error_code", "")),
    ("SystemSwitch", MetricDefinition::gauge("system_switch", "")),
    ("Balancing", MetricDefinition::gauge("balancing", "")),
    ("System/NrOfBatteries", MetricDefinition::gauge("system_battery_count", "")),
    ("System/BatteriesParallel", MetricDefinition::gauge("system_batteries_parallel_count", "")),
    ("System/BatteriesSeries", MetricDefinition::gauge("system_batteries_series_count", "")),
    ("System/NrOfCellsPerBattery", MetricDefinition::gauge("system_cells_per_battery_count", "")),
    ("System/MinCellVoltage", MetricDefinition::gauge("system_min_cell_voltage_volts", "")),
    ("System/MaxCellVoltage", MetricDefinition::gauge("system_max_cell_voltage_volts", "")),
    (
        "Diagnostics/ShutDownsDueError",
        MetricDefinition::gauge("diagnostics_shutdowns_due_to_error_count", ""),
    ),
    (
        "Diagnostics/LastErrors/1/Error",
        MetricDefinition::gauge("diagnostics_last_error", "").with_labels(&[("e", "1")]),
    ),
    (
        "Diagnostics/LastErrors/2/Error",
        MetricDefinition::gauge("diagnostics_last_error", "").with_labels(&[("e", "2")]),
    ),
    (
        "Diagnostics/LastErrors/3/Error",
        MetricDefinition::gauge("diagnostics_last_error", "").with_labels(&[("e", "3")]),
    ),
    (
        "Diagnostics/LastErrors/4/Error",
        MetricDefinition::gauge("diagnostics_last_error", "").with_labels(&[("e", "4")]),
    ),
    ("Io/AllowToCharge", MetricDefinition::gauge("io_allow_to_charge", "")),
    ("Io/AllowToDischarge", MetricDefinition::gauge("io_allow_to_discharge", "")),
    ("Io/ExternalRelay", MetricDefinition::gauge("io_external_relay", "")),
    ("History/MinimumCellVoltage", MetricDefinition::gauge("history_min_cell_voltage_volts", "")),
    ("History/MaximumCellVoltage", MetricDefinition::gauge("history_max_cell_voltage_volts", "")),
    ("Pv/V", MetricDefinition::gauge("pv_array_voltage_volts", "PV array voltage")),
    (
        "Pv/I",
        MetricDefinition::gauge("pv_array_current_amps", "PV current (= /Yield/Power divided by /Pv/V)"),
    ),
    ("Yield/Power", MetricDefinition::gauge("yield_power_watts", "Actual input power (Watts)")),
    (
        "Yield/User",
        MetricDefinition::gauge("yield_user_total_kwh", "Total kWh produced (user resettable)"),
    ),
    (
        "Yield/System",
        MetricDefinition::gauge("yield_system_total_kwh", "Total kWh produced (not resettable)"),
    ),
    ("Load/State", MetricDefinition::gauge("load_state", "Whether the load is on or off")),
    ("Load/I", MetricDefinition::gauge("load_current_amps", "Current from the load output")),
    (
        "MppOperationMode",
        MetricDefinition::gauge("mpp_operation_mode", "0 = Off 1 = Voltage or Current limited 2 = MPPT Tracker active"),
    ),
    (
        "Ac/Energy/Forward",
        MetricDefinition::gauge("ac_energy_forward_kwh", "kWh  - Total produced energy over all phases"),
    ),
    (
        "Ac/Power",
        MetricDefinition::gauge("ac_power_watts", "W    - Total power of all phases, preferably real power"),
    ),
    (
        "Ac/L1/Current",
        MetricDefinition::gauge("ac_phase_current", "A AC").with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/L1/Energy/Forward",
        MetricDefinition::gauge("ac_phase_energy_forward_kwh", "kWh")
            .with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/L1/Power",
        MetricDefinition::gauge("ac_phase_power_watts", "W").with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/L1/Voltage",
        MetricDefinition::gauge("ac_phase_voltage_volts", "V AC").with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/L2/Current",
        MetricDefinition::gauge("ac_phase_current_amps", "A AC").with_labels(&[("phase", "2")]),
    ),
    (
        "Ac/L2/Energy/Forward",
        MetricDefinition::gauge("ac_phase_energy_forward_kwh", "kWh")
            .with_labels(&[("phase", "2")]),
    ),
    (
        "Ac/L2/Power",
        MetricDefinition::gauge("ac_phase_power_watts", "W").with_labels(&[("phase", "2")]),
    ),
    (
        "Ac/L2/Voltage",
        MetricDefinition::gauge("ac_phase_voltage_volts", "V AC").with_labels(&[("phase", "2")]),
    ),
    (
        "Ac/L3/Current",
        MetricDefinition::gauge("ac_phase_current_amps", "A AC").with_labels(&[("phase", "3")]),
    ),
    (
        "Ac/L3/Energy/Forward",
        MetricDefinition::gauge("ac_phase_energy_forward_kwh", "kWh")
            .with_labels(&[("phase", "3")]),
    ),
    (
        "Ac/L3/Power",
        MetricDefinition::gauge("ac_phase_power_watts", "W").with_labels(&[("phase", "3")]),
    ),
    (
        "Ac/L3/Voltage",
        MetricDefinition::gauge("ac_phase_voltage_volts", "V AC").with_labels(&[("phase", "3")]),
    ),
    ("Ac/Current", MetricDefinition::gauge("ac_current_amps", "A AC - Deprecated")),
    ("Ac/Voltage", MetricDefinition::gauge("ac_voltage_volts", "V AC - Deprecated")),
    (
        "Ac/MaxPower",
        MetricDefinition::gauge("ac_max_power_watts", "Max rated power (in Watts) of the inverter"),
    ),
    (
        "Ac/PowerLimit",
        MetricDefinition::gauge("ac_power_limit_watts", "Used by the Fronius Zero-feedin feature, see ESS manual."),
    ),
    (
        "FroniusDeviceType",
        MetricDefinition::gauge("fronius_device_type", "Fronius specific product id list"),
    ),
    ("Position", MetricDefinition::gauge("position", "0=AC input 1; 1=AC output; 2=AC input 2")),
    (
        "StatusCode",
        MetricDefinition::gauge("status_code", "0=Startup 0; 1=Startup 1; 2=Startup 2; 3=Startup 4=Startup 4; 5=Startup 5; 6=Startup 6; 7=Running; 8=Standby; 9=Boot loading; 10=Error"),
    ),
    (
        "Ac/In/L1/I",
        MetricDefinition::gauge("ac_input_phase_current_amps", "A AC")
            .with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/In/L1/P",
        MetricDefinition::gauge("ac_input_phase_power_watts", "W").with_labels(&[("phase", "1")]),
    ),
    ("Ac/In/CurrentLimit", MetricDefinition::gauge("ac_input_current_limit_watts", "A AC")),
    ("NrOfOutputs", MetricDefinition::gauge("output_count", "The actual number of outputs.")),
    ("Dc/1/Current", MetricDefinition::gauge("dc_current_amps", "A DC").with_labels(&[("n", "1")])),
    (
        "Dc/1/Temperature",
        MetricDefinition::gauge("dc_temperature_celcius", "°C - Battery temperature")
            .with_labels(&[("n", "1")]),
    ),
    (
        "Dc/2/Voltage",
        MetricDefinition::gauge("dc_voltage_volts", "V DC").with_labels(&[("n", "2")]),
    ),
    ("Dc/2/Current", MetricDefinition::gauge("dc_current_amps", "A DC").with_labels(&[("n", "2")])),
    (
        "Dc/2/Temperature",
        MetricDefinition::gauge("dc_temperature_celcius", "°C - Battery temperature")
            .with_labels(&[("n", "2")]),
    ),
    ("Ac/Energy/Reverse", MetricDefinition::gauge("ac_energy_reverse_kwh", "")),
    (
        "Ac/Grid/L1/Power",
        MetricDefinition::gauge("ac_grid_phase_power_watt", "").with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/Grid/L2/Power",
        MetricDefinition::gauge("ac_grid_phase_power_watt", "").with_labels(&[("phase", "2")]),
    ),
    (
        "Ac/Grid/L3/Power",
        MetricDefinition::gauge("ac_grid_phase_power_watt", "").with_labels(&[("phase", "3")]),
    ),
    ("Ac/Grid/NumberOfPhases", MetricDefinition::gauge("ac_grid_number_of_phases", "")),
    (
        "Ac/L1/Energy/Reverse",
        MetricDefinition::gauge("ac_energy_phase_reverse_kwh", "").with_labels(&[("phase", "1")]),
    ),
    (
        "Ac/L2/Energy/Reverse",
        MetricDefinition::gauge("ac_energy_phase_reverse_kwh", "").with_labels(&[("phase", "2")]),
    ),
    (
        "Ac/L3/Energy/Reverse",
        MetricDefinition::gauge("ac_energy_phase_reverse_kwh", "").with_labels(&[("phase", "3")]),
    ),
    ("Dc/Battery/Temperature", MetricDefinition::gauge("dc_battery_temperature_celcius", "")),
];
