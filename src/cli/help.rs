//! CLI help text.

pub const LONG_ABOUT: &str = "Lists audio end-point devices that are enabled, or sets the default \
audio end-point device (console role) to the device with the given index.\n\n\
Device indices come from the current device list and may change when devices \
are added or removed between runs.";

pub const AFTER_HELP: &str = "\
FORMAT STRING
  -f format_str  Outputs the details of each device using the given format
                 string. If this parameter is omitted the format string
                 defaults to: \"Audio Device %d: %s\"

                 Parameters are passed to the format string in this order:
                   - Device index (int)
                   - Device friendly name (string)

                 Supported conversions: %d %i %u %x %X %s (also %ws, %ls), %%.

EXAMPLES
  endpointctl                List enabled playback devices
  endpointctl -f \"%d) %s\"    List devices as \"1) Speakers\"
  endpointctl 2              Make device 2 the default playback device";
