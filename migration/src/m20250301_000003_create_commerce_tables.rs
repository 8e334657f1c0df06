use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_accounts_and_catalog::{Courses, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 购物车表，每个学生最多一个
        manager
            .create_table(
                Table::create()
                    .table(Carts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Carts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Carts::StudentId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Carts::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Carts::Table, Carts::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 购物车条目表
        manager
            .create_table(
                Table::create()
                    .table(CartItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CartItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CartItems::CartId).big_integer().not_null())
                    .col(ColumnDef::new(CartItems::CourseId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CartItems::Table, CartItems::CartId)
                            .to(Carts::Table, Carts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CartItems::Table, CartItems::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 国家表
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Countries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Countries::CountryName).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 订单表，只保存卡号后四位，不保存 CVV
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Orders::CartItemId).big_integer().not_null())
                    .col(ColumnDef::new(Orders::Status).string().not_null())
                    .col(ColumnDef::new(Orders::NameOnCard).string().not_null())
                    .col(ColumnDef::new(Orders::CardLastFour).string().not_null())
                    .col(ColumnDef::new(Orders::ExpirationDate).string().not_null())
                    .col(ColumnDef::new(Orders::CountryId).big_integer().not_null())
                    .col(ColumnDef::new(Orders::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Orders::Table, Orders::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Orders::Table, Orders::CartItemId)
                            .to(CartItems::Table, CartItems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Orders::Table, Orders::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_student_id")
                    .table(Orders::Table)
                    .col(Orders::StudentId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 预置国家数据
        let default_countries = [
            "Kyrgyzstan",
            "Kazakhstan",
            "Uzbekistan",
            "Tajikistan",
            "Russia",
            "Turkey",
            "China",
            "Germany",
            "United Kingdom",
            "United States",
        ];

        for country_name in default_countries {
            let insert = Query::insert()
                .into_table(Countries::Table)
                .columns([Countries::CountryName])
                .values_panic([country_name.into()])
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CartItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Carts::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Carts {
    #[sea_orm(iden = "carts")]
    Table,
    Id,
    StudentId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CartItems {
    #[sea_orm(iden = "cart_items")]
    Table,
    Id,
    CartId,
    CourseId,
}

#[derive(DeriveIden)]
enum Countries {
    #[sea_orm(iden = "countries")]
    Table,
    Id,
    CountryName,
}

#[derive(DeriveIden)]
enum Orders {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    StudentId,
    CartItemId,
    Status,
    NameOnCard,
    CardLastFour,
    ExpirationDate,
    CountryId,
    CreatedAt,
}
