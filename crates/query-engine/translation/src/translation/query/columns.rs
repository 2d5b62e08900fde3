//! Handle dimension (column) references.

use druid_models::DimensionSpec;
use query_engine_sql::sql;

use crate::translation::helpers::{output_name_alias, Env};

/// The column a dimension spec reads. Filtered-dimension wrappers are transparent.
pub fn translate_dimension(env: &Env, dimension: &DimensionSpec) -> sql::ast::Expression {
    match dimension.unwrap_filtered() {
        DimensionSpec::Name(name) => sql::helpers::make_column(env.bare_column_name(name)),
        DimensionSpec::Default { dimension, .. } => sql::helpers::make_column(dimension.clone()),
        // unwrap_filtered never returns a wrapper
        DimensionSpec::Filtered { delegate } => translate_dimension(env, delegate),
    }
}

/// A select list entry for a dimension spec, aliased by its output name when `with_alias` is set.
pub fn translate_column(
    env: &Env,
    dimension: &DimensionSpec,
    with_alias: bool,
) -> sql::ast::SelectItem {
    let alias = match dimension.unwrap_filtered() {
        DimensionSpec::Default {
            output_name: Some(output_name),
            ..
        } if with_alias => Some(output_name_alias(output_name)),
        _ => None,
    };
    sql::helpers::make_select_item(translate_dimension(env, dimension), alias)
}

pub fn translate_columns(
    env: &Env,
    dimensions: &[DimensionSpec],
    with_alias: bool,
) -> Vec<sql::ast::SelectItem> {
    dimensions
        .iter()
        .map(|dimension| translate_column(env, dimension, with_alias))
        .collect()
}
