use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "purchases_v2")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub purchase_order: String,
    pub date: DateTimeWithTimeZone,
    pub status: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub item_list: LineRecords,
    #[sea_orm(column_type = "Decimal(None)")]
    pub total: Decimal,
    pub user_id: Uuid,
    pub provider_id: Uuid,
}

/// Lines as they sit inside the `item_list` JSONB column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct LineRecords(pub Vec<LineRecord>);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub item_id: Uuid,
    pub quantity: i32,
    // Stored as a string so JSONB keeps every digit.
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
