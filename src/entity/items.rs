use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub unit_measure: String,
    #[sea_orm(column_type = "Decimal(None)")]
    pub price: Decimal,
    pub description: String,
    pub provider_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::providers::Entity",
        from = "Column::ProviderId",
        to = "super::providers::Column::Id"
    )]
    Providers,
    #[sea_orm(has_many = "super::purchase_details::Entity")]
    PurchaseDetails,
}

impl Related<super::providers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Providers.def()
    }
}

impl Related<super::purchase_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
