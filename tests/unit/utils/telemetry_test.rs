// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use sxsk::utils::telemetry;

    #[test]
    fn test_telemetry_initialization_is_idempotent() {
        telemetry::init_telemetry();
        // A second call must not panic
        telemetry::init_telemetry();

        tracing::info!(code = "A1", kind = "ServerError", "Query failed");
        tracing::debug!("This is a debug message");
    }
}
