pub mod ad_metric;

pub use ad_metric::Entity as AdMetricEntity;
