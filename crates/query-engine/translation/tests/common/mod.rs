use std::path::{Path, PathBuf};

use druid_sql_configuration::version1::CONFIGURATION_FILENAME;
use druid_sql_configuration::Configuration;
use query_engine_translation::translation;

/// Translate the request of a golden file test. A test with its own `configuration.json`
/// is translated with that configuration, otherwise with the defaults.
pub async fn test_translation(testname: &str) -> Result<String, translation::error::Error> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let configuration = read_configuration(&directory).await;
    let request = std::fs::read_to_string(directory.join("request.json")).unwrap();

    translation::convert_json_to_sql(&configuration, &request)
}

async fn read_configuration(directory: &Path) -> Configuration {
    if !directory.join(CONFIGURATION_FILENAME).exists() {
        return Configuration::default();
    }
    let parsed_configuration = druid_sql_configuration::parse_configuration(directory)
        .await
        .unwrap();
    druid_sql_configuration::make_runtime_configuration(parsed_configuration).unwrap()
}
