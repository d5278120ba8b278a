mod required_categories;

pub use required_categories::RequiredCategories;
