use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 ad_metrics 表
        manager
            .create_table(
                Table::create()
                    .table(AdMetric::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdMetric::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdMetric::PageName).string().not_null())
                    .col(ColumnDef::new(AdMetric::Views).big_integer().not_null())
                    .col(ColumnDef::new(AdMetric::Visits).big_integer().not_null())
                    .col(ColumnDef::new(AdMetric::Expenses).big_integer().not_null())
                    .col(
                        ColumnDef::new(AdMetric::RequestDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 按日期查询当天数据
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ad_metrics_request_date")
                    .table(AdMetric::Table)
                    .col(AdMetric::RequestDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ad_metrics_request_date")
                    .table(AdMetric::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AdMetric::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdMetric {
    #[sea_orm(iden = "ad_metrics")]
    Table,
    Id,
    PageName,
    Views,
    Visits,
    Expenses,
    RequestDate,
}
