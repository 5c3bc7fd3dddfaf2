// bin/seed.rs
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;

use finishhub::config::Config;
use finishhub::db::bookingdb::BookingExt;
use finishhub::db::categorydb::CategoryExt;
use finishhub::db::contractordb::ContractorExt;
use finishhub::db::customerdb::CustomerExt;
use finishhub::db::db::DBClient;
use finishhub::db::servicedb::ServiceExt;
use finishhub::db::userdb::UserExt;
use finishhub::models::bookingmodel::BookingStatus;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::init();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let db = DBClient::new(pool);

    let painting = db
        .save_category(
            "Painting",
            Some("Wall and ceiling painting services with various finishes".to_string()),
        )
        .await?;
    let tiling = db
        .save_category(
            "Tiling",
            Some("Floor and wall tile installation and repair services".to_string()),
        )
        .await?;
    let electrical = db
        .save_category(
            "Electrical",
            Some("Wiring, lighting installation, and electrical maintenance".to_string()),
        )
        .await?;
    let carpentry = db
        .save_category(
            "Carpentry",
            Some("Woodwork, door installation, and custom furniture building".to_string()),
        )
        .await?;

    let wall_painting = db
        .save_service(
            "Interior Wall Painting",
            Some("Two coats with putty and primer included".to_string()),
            BigDecimal::from(2500),
            Some(
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSItpNahcbA4k_-_aDD8abyaRLrLritLb3a-Q&s"
                    .to_string(),
            ),
            painting.id,
        )
        .await?;
    db.save_service(
        "Ceramic Tiling - Floor",
        Some("Standard ceramic tiles with grout".to_string()),
        BigDecimal::from(4000),
        Some(
            "https://images.pexels.com/photos/7245511/pexels-photo-7245511.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
                .to_string(),
        ),
        tiling.id,
    )
    .await?;
    db.save_service(
        "Electrical Wiring - Full Apartment",
        Some("Full wiring and breaker installation for 3-bedroom flat".to_string()),
        BigDecimal::from(12000),
        Some(
            "https://cdn.prod.website-files.com/643dd13153ce80ea0a9ceae9/66bcfa65cd99cbcce70e919c_Untitled%20(98).jpg"
                .to_string(),
        ),
        electrical.id,
    )
    .await?;
    db.save_service(
        "Custom Kitchen Cabinets",
        Some("Made from MDF with waterproof laminate".to_string()),
        BigDecimal::from(15000),
        Some("https://21stcenturycd.com/wp-content/uploads/2025/02/Aspen-kitchen-2-1.webp".to_string()),
        carpentry.id,
    )
    .await?;

    let painter = db
        .save_contractor(
            "Omar Bahgat",
            "01012345678",
            "omar@gmail.com",
            Some("Painting".to_string()),
            Some(4.6),
        )
        .await?;
    db.save_contractor(
        "Mostafa Khaled",
        "01122334455",
        "mostafa@finishing.com",
        Some("Tiling".to_string()),
        Some(4.3),
    )
    .await?;
    db.save_contractor(
        "Nader Fouad",
        "01233445566",
        "nader.electric@finishing.com",
        Some("Electrical".to_string()),
        Some(4.8),
    )
    .await?;
    db.save_contractor(
        "Mohamed Magdy",
        "01099887766",
        "mohamed.wood@finishing.com",
        Some("Carpentry".to_string()),
        Some(4.5),
    )
    .await?;

    let customer = db
        .save_customer("Omar Bahgat", "omar.bahgat@example.com", "01067891234")
        .await?;
    db.save_customer("Salma Youssef", "salma.youssef@example.com", "01178901234")
        .await?;

    db.save_booking(
        wall_painting.id,
        customer.id,
        painter.id,
        "2025-06-01T10:00:00Z".parse::<DateTime<Utc>>()?,
        Some(BookingStatus::Confirmed),
    )
    .await?;

    // The users table has a unique email, so re-running the seed keeps the
    // existing admin instead of failing.
    if db
        .get_user(None, Some("admin@finishing.com"))
        .await?
        .is_none()
    {
        db.save_user("Dashboard Admin", "admin@finishing.com", None, true)
            .await?;
    }

    println!("🌱 Seed complete");

    Ok(())
}
