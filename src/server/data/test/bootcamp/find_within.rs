use super::*;

async fn seed_cities(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let admin = factory::user::create_user_with_role(db, entity::user::Role::Admin).await?;

    for (name, (lat, lng)) in [
        ("Boston Camp", BOSTON),
        ("Cambridge Camp", CAMBRIDGE),
        ("Providence Camp", PROVIDENCE),
        ("New York Camp", NEW_YORK),
    ] {
        factory::bootcamp::BootcampFactory::new(db, admin.id)
            .name(name)
            .coordinates(lat, lng)
            .build()
            .await?;
    }

    Ok(())
}

fn names(bootcamps: &[crate::server::model::bootcamp::Bootcamp]) -> Vec<String> {
    let mut names: Vec<String> = bootcamps.iter().map(|b| b.name.clone()).collect();
    names.sort();
    names
}

/// Tests a 50 mile radius around Boston.
///
/// Boston, Cambridge and Providence lie inside; New York is about 190 miles away.
///
/// Expected: exactly the three New England bootcamps
#[tokio::test]
async fn finds_bootcamps_within_fifty_miles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_cities(db).await?;

    let center = GeoPoint {
        latitude: BOSTON.0,
        longitude: BOSTON.1,
    };
    let found = BootcampRepository::new(db)
        .find_within(&SearchArea::from_miles(center, 50.0))
        .await?;

    assert_eq!(
        names(&found),
        vec!["Boston Camp", "Cambridge Camp", "Providence Camp"]
    );

    Ok(())
}

/// Tests a 10 mile radius around Boston.
///
/// Expected: Boston and Cambridge only
#[tokio::test]
async fn finds_bootcamps_within_ten_miles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_cities(db).await?;

    let center = GeoPoint {
        latitude: BOSTON.0,
        longitude: BOSTON.1,
    };
    let found = BootcampRepository::new(db)
        .find_within(&SearchArea::from_miles(center, 10.0))
        .await?;

    assert_eq!(names(&found), vec!["Boston Camp", "Cambridge Camp"]);

    Ok(())
}

/// Tests a zero radius centred away from every bootcamp.
///
/// Expected: empty result
#[tokio::test]
async fn zero_radius_finds_nothing_elsewhere() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_cities(db).await?;

    let center = GeoPoint {
        latitude: 0.0,
        longitude: 0.0,
    };
    let found = BootcampRepository::new(db)
        .find_within(&SearchArea::from_miles(center, 0.0))
        .await?;

    assert!(found.is_empty());

    Ok(())
}
