//! Handle the ordering of topN queries.

use druid_models::TopNMetric;
use query_engine_sql::sql;

/// Order by the topN metric. A metric sorts highest first, the dimension itself
/// sorts lowest first, and `inverted` flips either.
pub fn translate_metric(
    metric: &TopNMetric,
    dimension: &sql::ast::Expression,
) -> sql::ast::OrderByElement {
    match metric {
        TopNMetric::Numeric(name) => sql::ast::OrderByElement {
            target: sql::helpers::make_column(name.clone()),
            direction: sql::ast::OrderByDirection::Desc,
        },
        TopNMetric::Dimension => sql::ast::OrderByElement {
            target: dimension.clone(),
            direction: sql::ast::OrderByDirection::Asc,
        },
        TopNMetric::Inverted(metric) => {
            let element = translate_metric(metric, dimension);
            sql::ast::OrderByElement {
                direction: element.direction.reverse(),
                ..element
            }
        }
    }
}
