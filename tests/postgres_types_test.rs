//! Integration tests for the hstore, jsonb and inet bindings
//!
//! These talk to a real PostgreSQL server and only run when `DATABASE_URL` is set;
//! without it every test returns early.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use pgscalar::prelude::*;
use serde_json::json;

async fn setup_pool() -> Option<PgPool> {
    let database_url = std::env::var("DATABASE_URL").ok()?;

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::query("CREATE EXTENSION IF NOT EXISTS hstore")
        .execute(&pool)
        .await
        .expect("Failed to create hstore extension");

    Some(pool)
}

#[tokio::test]
async fn test_hstore_round_trip() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await else {
        return Ok(());
    };

    let tags = Hstore::from_iter([
        ("color", Some("red")),
        ("quote", Some("say \"hi\"")),
        ("missing", None),
    ]);

    let fetched: Hstore = sqlx::query_scalar("SELECT $1::hstore")
        .bind(&tags)
        .fetch_one(&pool)
        .await?;
    assert_eq!(fetched, tags);

    Ok(())
}

#[tokio::test]
async fn test_empty_hstore_binds_null() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await else {
        return Ok(());
    };

    let is_null: bool = sqlx::query_scalar("SELECT $1::hstore IS NULL")
        .bind(Hstore::default())
        .fetch_one(&pool)
        .await?;
    assert!(is_null);

    let fetched: Option<Hstore> = sqlx::query_scalar("SELECT NULL::hstore")
        .fetch_one(&pool)
        .await?;
    assert_eq!(fetched, None);

    Ok(())
}

#[tokio::test]
async fn test_hstore_text_format() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await else {
        return Ok(());
    };

    // the simple query protocol returns text-format values
    let row = sqlx::raw_sql(r#"SELECT 'a=>1, b=>NULL, "c d"=>"e\"f"'::hstore"#)
        .fetch_one(&pool)
        .await?;
    let fetched: Hstore = row.try_get_unchecked(0)?;

    assert_eq!(
        fetched,
        Hstore::from_iter([("a", Some("1")), ("b", None), ("c d", Some("e\"f"))])
    );

    Ok(())
}

#[tokio::test]
async fn test_jsonb_round_trip() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await else {
        return Ok(());
    };

    let value = json!({"x": 1, "tags": ["a", "b"], "nested": {"ok": true}});
    let fetched: Jsonb = sqlx::query_scalar("SELECT $1::jsonb")
        .bind(Jsonb::from_value(&value))
        .fetch_one(&pool)
        .await?;
    assert_eq!(fetched.to_value()?, value);

    let row = sqlx::raw_sql(r#"SELECT '{"b": 2, "a": 1}'::jsonb"#)
        .fetch_one(&pool)
        .await?;
    let fetched: Jsonb = row.try_get_unchecked(0)?;
    assert_eq!(fetched.to_value()?, json!({"a": 1, "b": 2}));

    Ok(())
}

#[tokio::test]
async fn test_empty_jsonb_binds_null() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await else {
        return Ok(());
    };

    let is_null: bool = sqlx::query_scalar("SELECT $1::jsonb IS NULL")
        .bind(Jsonb::default())
        .fetch_one(&pool)
        .await?;
    assert!(is_null);

    Ok(())
}

#[tokio::test]
async fn test_inet_round_trip() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await else {
        return Ok(());
    };

    for addr in [
        IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
        IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)),
    ] {
        let fetched: Inet = sqlx::query_scalar("SELECT $1::inet")
            .bind(Inet::from(addr))
            .fetch_one(&pool)
            .await?;
        assert_eq!(fetched.ip(), Some(addr));
    }

    let text: String = sqlx::query_scalar("SELECT host($1::inet)")
        .bind(Inet(vec![10, 0, 0, 1]))
        .fetch_one(&pool)
        .await?;
    assert_eq!(text, "10.0.0.1");

    Ok(())
}

#[tokio::test]
async fn test_inet_with_netmask_keeps_address() -> anyhow::Result<()> {
    let Some(pool) = setup_pool().await else {
        return Ok(());
    };

    let fetched: Inet = sqlx::query_scalar("SELECT '192.168.1.5/24'::inet")
        .fetch_one(&pool)
        .await?;
    assert_eq!(fetched.as_bytes(), &[192u8, 168, 1, 5]);

    let row = sqlx::raw_sql("SELECT '192.168.1.5/24'::inet")
        .fetch_one(&pool)
        .await?;
    let fetched: Inet = row.try_get_unchecked(0)?;
    assert_eq!(fetched.as_bytes(), &[192u8, 168, 1, 5]);

    Ok(())
}

#[tokio::test]
async fn test_invalid_inet_length_fails_bind() {
    let Some(pool) = setup_pool().await else {
        return;
    };

    let result: Result<String, _> = sqlx::query_scalar("SELECT $1::inet::text")
        .bind(Inet(vec![1, 2, 3, 4, 5]))
        .fetch_one(&pool)
        .await;
    assert!(result.is_err());
}
