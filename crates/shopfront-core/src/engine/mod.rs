//! Stateless query engine.
//!
//! Two composition modes are offered:
//! - combined: `apply` conjoins the text and price constraints of one query
//! - independent: `filter_by_text` / `filter_by_price` each start from the
//!   full catalog, and whichever the host invoked last wins


use crate::{
    catalog::Catalog,
    config::FilterConfig,
    obs::{
        QueryOp, QueryTraceSink,
        sink::Span,
        trace::{TraceScope, start_trace},
    },
    predicate::ProductPredicate,
    query::{PriceRange, Query, RangePolicy, ValidationError},
    types::Price,
    view::View,
};
use serde::Deserialize;

///
/// FilterMode
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Text and price constraints always apply together.
    #[default]
    Combined,

    /// Text search and price filter each reset against the full catalog.
    Independent,
}

///
/// QueryEngine
///
/// Holds only immutable settings; every call is independent and safe to run
/// concurrently against the same catalog.
///

#[derive(Clone, Copy)]
pub struct QueryEngine {
    price_ceiling: Price,
    range_policy: RangePolicy,
    trace: Option<&'static dyn QueryTraceSink>,
}

impl QueryEngine {
    #[must_use]
    pub const fn new(price_ceiling: Price, range_policy: RangePolicy) -> Self {
        Self {
            price_ceiling,
            range_policy,
            trace: None,
        }
    }

    #[must_use]
    pub const fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.price_ceiling, config.range_policy)
    }

    /// Attach a trace sink.
    #[must_use]
    pub const fn with_trace(mut self, sink: &'static dyn QueryTraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    #[must_use]
    pub const fn price_ceiling(&self) -> Price {
        self.price_ceiling
    }

    #[must_use]
    pub const fn range_policy(&self) -> RangePolicy {
        self.range_policy
    }

    /// Combined mode: products matching both the query's text and price
    /// constraints, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog, query: &Query) -> Result<View<'a>, ValidationError> {
        let op = QueryOp::Apply;
        let span = Span::new(op);
        let trace = start_trace(self.trace, op, catalog.len());

        let query = match query.price_range() {
            Some(range) => match range.within(self.price_ceiling, self.range_policy) {
                Ok(range) => query.clone().with_price_range(range),
                Err(err) => return Err(reject(span, trace, err)),
            },
            None => query.clone(),
        };

        let predicate = ProductPredicate::from_query(&query);

        Ok(execute(catalog, &predicate, span, trace))
    }

    /// Independent mode: the full catalog filtered by text alone.
    /// A blank term returns the whole catalog.
    #[must_use]
    pub fn filter_by_text<'a>(&self, catalog: &'a Catalog, term: &str) -> View<'a> {
        let op = QueryOp::TextFilter;
        let span = Span::new(op);
        let trace = start_trace(self.trace, op, catalog.len());

        let predicate = ProductPredicate::text(term).unwrap_or(ProductPredicate::True);

        execute(catalog, &predicate, span, trace)
    }

    /// Independent mode: the full catalog filtered by price alone.
    pub fn filter_by_price<'a>(
        &self,
        catalog: &'a Catalog,
        min: f64,
        max: f64,
    ) -> Result<View<'a>, ValidationError> {
        let op = QueryOp::PriceFilter;
        let span = Span::new(op);
        let trace = start_trace(self.trace, op, catalog.len());

        let range = match PriceRange::resolve(min, max, self.range_policy, self.price_ceiling) {
            Ok(range) => range,
            Err(err) => return Err(reject(span, trace, err)),
        };

        Ok(execute(
            catalog,
            &ProductPredicate::PriceBetween(range),
            span,
            trace,
        ))
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::from_config(&FilterConfig::default())
    }
}

impl std::fmt::Debug for QueryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEngine")
            .field("price_ceiling", &self.price_ceiling)
            .field("range_policy", &self.range_policy)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}

// Single full scan in catalog order; the only place views are built.
fn execute<'a>(
    catalog: &'a Catalog,
    predicate: &ProductPredicate,
    mut span: Span,
    trace: Option<TraceScope>,
) -> View<'a> {
    let items: Vec<_> = catalog
        .iter()
        .filter(|product| predicate.eval(product))
        .collect();

    let scanned = u64::try_from(catalog.len()).unwrap_or(u64::MAX);
    let matched = u64::try_from(items.len()).unwrap_or(u64::MAX);
    span.set_rows(scanned, matched);
    if let Some(trace) = trace {
        trace.finish(matched);
    }

    View::from_refs(items)
}

fn reject(span: Span, trace: Option<TraceScope>, err: ValidationError) -> ValidationError {
    span.reject();
    if let Some(trace) = trace {
        trace.reject(&err);
    }

    err
}

///
/// FREE FUNCTIONS
/// Default engine (ceiling 3000, strict bounds), no tracing.
///

pub fn apply<'a>(catalog: &'a Catalog, query: &Query) -> Result<View<'a>, ValidationError> {
    QueryEngine::default().apply(catalog, query)
}

#[must_use]
pub fn filter_by_text<'a>(catalog: &'a Catalog, term: &str) -> View<'a> {
    QueryEngine::default().filter_by_text(catalog, term)
}

pub fn filter_by_price<'a>(
    catalog: &'a Catalog,
    min: f64,
    max: f64,
) -> Result<View<'a>, ValidationError> {
    QueryEngine::default().filter_by_price(catalog, min, max)
}
