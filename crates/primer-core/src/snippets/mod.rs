//! Snippets - 状態を持たない純粋関数群
//!
//! 各モジュールは互いに依存しない。どれも単独で呼び出し・テスト・差し替えが可能。

pub mod concat;
pub mod day;
pub mod product;
pub mod rating;
pub mod text;
pub mod value;
pub mod vehicle;

pub use self::concat::concatenate_arrays;
pub use self::day::{Day, DayType, get_day_type};
pub use self::product::{Product, get_most_expensive_product};
pub use self::rating::{Book, MIN_RATING, filter_by_rating};
pub use self::text::format_string;
pub use self::value::{Value, process_value};
pub use self::vehicle::{Car, Vehicle, car_model, vehicle_info};
