//! Behaviour of the filter, aggregation and column renderers, and of the errors
//! the translation reports.

use similar_asserts::assert_eq;

use druid_models::{Aggregation, DimensionSpec, Filter};
use druid_sql_configuration::Configuration;
use query_engine_translation::translation::{self, error::Error};

fn filter(json: serde_json::Value) -> Filter {
    serde_json::from_value(json).unwrap()
}

fn aggregations(json: serde_json::Value) -> Vec<Aggregation> {
    serde_json::from_value(json).unwrap()
}

fn render_filter(json: serde_json::Value) -> Option<String> {
    translation::render_filter(&filter(json)).unwrap()
}

fn render_aggregations(json: serde_json::Value) -> Option<String> {
    translation::render_aggregations(&Configuration::default(), &aggregations(json)).unwrap()
}

fn convert(json: serde_json::Value) -> Result<String, Error> {
    translation::convert_json_to_sql(&Configuration::default(), &json.to_string())
}

// filters

#[test]
fn filters_without_effect_render_nothing() {
    assert_eq!(render_filter(serde_json::json!({"type": "and", "fields": []})), None);
    assert_eq!(render_filter(serde_json::json!({"type": "or", "fields": []})), None);
    assert_eq!(
        render_filter(serde_json::json!({"type": "bound", "dimension": "x"})),
        None
    );
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "or",
            "fields": [
                {"type": "and", "fields": []},
                {"type": "bound", "dimension": "x"}
            ]
        })),
        None
    );
}

#[test]
fn not_propagates_nothing() {
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "not",
            "field": {"type": "and", "fields": []}
        })),
        None
    );
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "not",
            "field": {"type": "like", "dimension": "page", "pattern": "%bot"}
        })),
        Some(r#"not "page" like '%bot'"#.to_string())
    );
}

#[test]
fn connectives_drop_children_without_effect() {
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "and",
            "fields": [
                {"type": "selector", "dimension": "a", "value": "1"},
                {"type": "or", "fields": []},
                {"type": "selector", "dimension": "b", "value": 2}
            ]
        })),
        Some(r#"("a" = '1' and "b" = '2')"#.to_string())
    );
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "or",
            "fields": [{"type": "selector", "dimension": "a", "value": "1"}]
        })),
        Some(r#"("a" = '1')"#.to_string())
    );
}

#[test]
fn bound_strictness_defaults_to_inclusive() {
    let implicit = render_filter(serde_json::json!({
        "type": "bound", "dimension": "added", "lower": 1, "upper": 9
    }));
    let explicit = render_filter(serde_json::json!({
        "type": "bound", "dimension": "added", "lower": 1, "upper": 9,
        "lowerStrict": false, "upperStrict": false
    }));
    assert_eq!(implicit, explicit);
    assert_eq!(implicit, Some(r#"("added" >= 1 and "added" <= 9)"#.to_string()));
}

#[test]
fn bound_renders_one_sided_ranges_bare() {
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "bound", "dimension": "added", "lower": "0.5", "lowerStrict": true
        })),
        Some(r#""added" > 0.5"#.to_string())
    );
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "bound", "dimension": "name", "upper": "m", "upperStrict": true
        })),
        Some(r#""name" < 'm'"#.to_string())
    );
}

#[test]
fn leaves_render_their_comparison() {
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "in", "dimension": "country", "values": []
        })),
        Some(r#""country" in ()"#.to_string())
    );
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "selector", "dimension": "name", "value": "O'Brien"
        })),
        Some(r#""name" = 'O''Brien'"#.to_string())
    );
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "search", "dimension": "page",
            "query": {"type": "contains", "value": "war"}
        })),
        Some(r#"contains("page", 'war')"#.to_string())
    );
}

#[test]
fn like_patterns_are_passed_through() {
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "like", "dimension": "d", "pattern": "a''b%"
        })),
        Some(r#""d" like 'a''b%'"#.to_string())
    );
    assert_eq!(
        render_filter(serde_json::json!({
            "type": "not",
            "field": {
                "type": "or",
                "fields": [
                    {"type": "like", "dimension": "d", "pattern": "a%'"},
                    {"type": "selector", "dimension": "e", "value": "it's"}
                ]
            }
        })),
        Some(r#"not ("d" like 'a%'' or "e" = 'it''s')"#.to_string())
    );
}

// aggregations

#[test]
fn aggregation_suffixes_pick_the_operation() {
    assert_eq!(
        render_aggregations(serde_json::json!([
            {"type": "longSum", "name": "a", "fieldName": "f"},
            {"type": "doubleSum", "name": "b", "fieldName": "f"}
        ])),
        Some(r#"SUM("f") AS "a", SUM("f") AS "b""#.to_string())
    );
    assert_eq!(
        render_aggregations(serde_json::json!([
            {"type": "doubleLast", "name": "a", "fieldName": "f"},
            {"type": "longMax", "name": "b", "fieldName": "f"},
            {"type": "stringFirst", "name": "c", "fieldName": "f"},
            {"type": "floatMin", "name": "d", "fieldName": "f"}
        ])),
        Some(
            r#"MAX("f") AS "a", MAX("f") AS "b", MIN("f") AS "c", MIN("f") AS "d""#.to_string()
        )
    );
}

#[test]
fn filtered_aggregation_without_effect_is_dropped() {
    assert_eq!(
        render_aggregations(serde_json::json!([{
            "type": "filtered",
            "filter": {"type": "and", "fields": []},
            "aggregator": {"type": "count", "name": "X"}
        }])),
        None
    );
    assert_eq!(render_aggregations(serde_json::json!([])), None);
}

#[test]
fn filtered_aggregations_guard_their_input() {
    assert_eq!(
        render_aggregations(serde_json::json!([
            {
                "type": "filtered",
                "filter": {"type": "selector", "dimension": "d", "value": "v"},
                "aggregator": {"type": "count", "name": "hits"}
            },
            {
                "type": "filtered",
                "filter": {"type": "selector", "dimension": "d", "value": "v"},
                "aggregator": {"type": "doubleMin", "name": {"name": "low"}, "fieldName": "f"}
            }
        ])),
        Some(
            r#"COUNT(CASE WHEN "d" = 'v' THEN 1 END) AS "hits", MIN(CASE WHEN "d" = 'v' THEN "f" END) AS "low""#
                .to_string()
        )
    );
}

#[test]
fn literal_output_names_are_escaped() {
    assert_eq!(
        render_aggregations(serde_json::json!([{"type": "count", "name": "say \"hi\""}])),
        Some(r#"COUNT(*) AS "say \"hi\"""#.to_string())
    );
}

// columns

#[test]
fn columns_render_with_and_without_aliases() {
    let columns: Vec<DimensionSpec> = serde_json::from_value(serde_json::json!([
        "__time",
        {"type": "default", "dimension": "user", "outputName": "editor"},
        {"type": "regexFiltered", "delegate": "channel", "pattern": "^#"}
    ]))
    .unwrap();
    let configuration = Configuration::default();

    assert_eq!(
        translation::render_columns(&configuration, &columns, true),
        r#""time", "user" AS "editor", "channel""#
    );
    assert_eq!(
        translation::render_columns(&configuration, &columns, false),
        r#""time", "user", "channel""#
    );
    assert_eq!(translation::render_columns(&configuration, &[], true), "");
}

// queries

#[test]
fn table_names_have_hyphens_replaced() {
    let sql = convert(serde_json::json!({
        "queryType": "scan",
        "dataSource": "a-b-c",
        "columns": ["x"]
    }))
    .unwrap();
    assert_eq!(sql, r#"SELECT "x" FROM a_b_c"#);
}

#[test]
fn top_level_filter_without_effect_adds_no_where() {
    let sql = convert(serde_json::json!({
        "queryType": "scan",
        "dataSource": "t",
        "filter": {"type": "and", "fields": []}
    }))
    .unwrap();
    assert_eq!(sql, "SELECT * FROM t");
}

// errors

#[test]
fn unknown_kinds_raise_their_own_errors() {
    let unknown_filter = convert(serde_json::json!({
        "queryType": "scan", "dataSource": "t",
        "filter": {"type": "regex", "dimension": "x", "pattern": "a+"}
    }));
    assert!(matches!(unknown_filter, Err(Error::UnsupportedFilterType(kind)) if kind == "regex"));

    let unknown_aggregation = convert(serde_json::json!({
        "queryType": "timeseries", "dataSource": "t",
        "aggregations": [{"type": "hyperUnique", "name": "u", "fieldName": "x"}]
    }));
    assert!(matches!(
        unknown_aggregation,
        Err(Error::UnsupportedAggregationType(kind)) if kind == "hyperUnique"
    ));

    let unknown_query = convert(serde_json::json!({
        "queryType": "search", "dataSource": "t"
    }));
    assert!(matches!(unknown_query, Err(Error::UnsupportedQueryType(kind)) if kind == "search"));
}

#[test]
fn unknown_filtered_aggregator_fails_even_without_effect() {
    let result = translation::render_aggregations(
        &Configuration::default(),
        &aggregations(serde_json::json!([{
            "type": "filtered",
            "filter": {"type": "and", "fields": []},
            "aggregator": {"type": "thetaSketch", "name": "s", "fieldName": "x"}
        }])),
    );
    assert!(matches!(
        result,
        Err(Error::UnsupportedAggregationType(kind)) if kind == "thetaSketch"
    ));
}

#[test]
fn other_search_queries_are_rejected() {
    let result = translation::render_filter(&filter(serde_json::json!({
        "type": "search", "dimension": "page",
        "query": {"type": "regex", "pattern": "^a"}
    })));
    assert!(matches!(result, Err(Error::UnsupportedSearchQueryType(kind)) if kind == "regex"));
}

#[test]
fn malformed_input_is_rejected() {
    let unknown_data_source = convert(serde_json::json!({
        "queryType": "scan",
        "dataSource": {"type": "join", "left": "a", "right": "b"}
    }));
    assert!(matches!(
        unknown_data_source,
        Err(Error::UnsupportedDataSourceType(kind)) if kind == "join"
    ));

    let bad_interval = convert(serde_json::json!({
        "queryType": "scan", "dataSource": "t", "intervals": ["2020-01-01"]
    }));
    assert!(matches!(bad_interval, Err(Error::InvalidInterval(_))));

    let no_columns = convert(serde_json::json!({
        "queryType": "groupBy", "dataSource": "t"
    }));
    assert!(matches!(no_columns, Err(Error::NoColumns)));

    let missing_field = convert(serde_json::json!({
        "queryType": "topN", "dataSource": "t", "dimension": "x"
    }));
    assert!(matches!(missing_field, Err(Error::InvalidQuery(_))));
}
