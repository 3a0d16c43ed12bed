use primer_core::snippets::{
    Book, Car, Day, Product, concatenate_arrays, car_model, filter_by_rating, format_string,
    get_day_type, get_most_expensive_product, process_value, vehicle_info,
};
use primer_core::{DelayedSquare, Outcome};
use tracing_subscriber::EnvFilter;

/// stdout is the program output; logs go to stderr (RUST_LOG で調整)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_outcome<T: std::fmt::Display>(outcome: Outcome<T>) {
    match outcome.into_result() {
        Ok(value) => println!("{value}"),
        Err(e) => println!("Error: {e}"),
    }
}

#[tokio::main]
async fn main() -> Result<(), serde_json::Error> {
    init_tracing();

    // (A) 文字列整形
    println!("{}", format_string("Hello", None));
    println!("{}", format_string("Hello", Some(true)));
    println!("{}", format_string("Hello", Some(false)));

    // (B) 評価でフィルタ
    let books = vec![
        Book::new("Book A", 4.5),
        Book::new("Book B", 3.2),
        Book::new("Book C", 5.0),
    ];
    println!("{}", serde_json::to_string(&filter_by_rating(&books))?);

    // (C) 連結
    println!("{}", serde_json::to_string(&concatenate_arrays([vec!["a", "b"], vec!["c"]]))?);
    println!("{}", serde_json::to_string(&concatenate_arrays([vec![1, 2], vec![3, 4], vec![5]]))?);

    // (D) Vehicle / Car
    let my_car = Car::new("Toyota", 2020, "Corolla");
    println!("{}", vehicle_info(&my_car));
    println!("{}", car_model(&my_car));

    // (E) text or number
    println!("{}", process_value("hello"));
    println!("{}", process_value(10_i32));

    // (F) 最高値の商品
    let products = vec![
        Product::new("Pen", 10.0),
        Product::new("Notebook", 25.0),
        Product::new("Bag", 50.0),
    ];
    println!("{}", serde_json::to_string(&get_most_expensive_product(&products))?);

    // (G) 曜日判定
    println!("{}", get_day_type(Day::Monday));
    println!("{}", get_day_type(Day::Sunday));

    // (H) 遅延二乗: 2 本同時に走らせ、結果は呼び出し順に出す
    let square = DelayedSquare::default();
    let (positive, negative) = tokio::join!(square.compute(4_i32), square.compute(-3_i32));
    print_outcome(positive);
    print_outcome(negative);

    Ok(())
}
