//! Fixed speech text

pub const SKILL_NAME: &str = "Pressure Check";

pub const GET_PRESSURE_MESSAGE: &str = "The current pressure";
pub const LOCATION_CONNECTOR: &str = " in ";
pub const PRESSURE_CONNECTOR: &str = " is: ";
pub const PRESSURE_UNITS_IN: &str = " inches of mercury ";
pub const PRESSURE_ALT_CONNECTOR: &str = " or ";
pub const PRESSURE_UNITS_MB: &str = " millibars ";

pub const HELP_MESSAGE: &str =
    "You can say 'run pressure check,' you can say 'exit'... What can I help you with?";
pub const HELP_REPROMPT: &str = "What can I help you with?";
pub const STOP_MESSAGE: &str = "Goodbye!";

pub const NOTIFY_MISSING_PERMISSIONS: &str =
    "Please enable Location permissions in the Amazon Alexa app.";
pub const NO_ADDRESS: &str = "It looks like you don't have an address set. You can set your address from the companion app.";
pub const ERROR: &str = "Uh Oh. Looks like something went wrong.";
pub const LOCATION_FAILURE: &str =
    "There was an error with the Device Address API. Please try again.";

/// Permission scope for reading the full device address
pub const ALL_ADDRESS_PERMISSION: &str = "read::alexa:device:all:address";
pub const PERMISSIONS: &[&str] = &[ALL_ADDRESS_PERMISSION];
