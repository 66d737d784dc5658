//! Environment source: ENDPOINTCTL_<SECTION>__<KEY>, e.g. ENDPOINTCTL_LISTING__FORMAT.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("ENDPOINTCTL")
            .prefix_separator("_")
            .separator("__"),
    )
}
