pub mod fuzzy;
pub mod providers;
pub mod rating_filter;
pub mod recommendations;
pub mod recommender;
