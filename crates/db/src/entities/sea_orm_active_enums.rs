//! Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "order_status")]
pub enum OrderStatus {
    #[sea_orm(string_value = "aguardando_pagamento")]
    AguardandoPagamento,
    #[sea_orm(string_value = "confirmado")]
    Confirmado,
    #[sea_orm(string_value = "em_separacao")]
    EmSeparacao,
    #[sea_orm(string_value = "em_transito")]
    EmTransito,
    #[sea_orm(string_value = "entregue")]
    Entregue,
    #[sea_orm(string_value = "cancelado")]
    Cancelado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_method")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "pix")]
    Pix,
    #[sea_orm(string_value = "cartao_credito")]
    CartaoCredito,
    #[sea_orm(string_value = "boleto")]
    Boleto,
    #[sea_orm(string_value = "dinheiro")]
    Dinheiro,
}

impl From<OrderStatus> for kitroute_core::reports::OrderStatus {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::AguardandoPagamento => Self::AguardandoPagamento,
            OrderStatus::Confirmado => Self::Confirmado,
            OrderStatus::EmSeparacao => Self::EmSeparacao,
            OrderStatus::EmTransito => Self::EmTransito,
            OrderStatus::Entregue => Self::Entregue,
            OrderStatus::Cancelado => Self::Cancelado,
        }
    }
}

impl From<kitroute_core::reports::OrderStatus> for OrderStatus {
    fn from(status: kitroute_core::reports::OrderStatus) -> Self {
        use kitroute_core::reports::OrderStatus as Core;
        match status {
            Core::AguardandoPagamento => Self::AguardandoPagamento,
            Core::Confirmado => Self::Confirmado,
            Core::EmSeparacao => Self::EmSeparacao,
            Core::EmTransito => Self::EmTransito,
            Core::Entregue => Self::Entregue,
            Core::Cancelado => Self::Cancelado,
        }
    }
}

impl From<PaymentMethod> for kitroute_core::reports::PaymentMethod {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Pix => Self::Pix,
            PaymentMethod::CartaoCredito => Self::CartaoCredito,
            PaymentMethod::Boleto => Self::Boleto,
            PaymentMethod::Dinheiro => Self::Dinheiro,
        }
    }
}

impl From<kitroute_core::reports::PaymentMethod> for PaymentMethod {
    fn from(method: kitroute_core::reports::PaymentMethod) -> Self {
        use kitroute_core::reports::PaymentMethod as Core;
        match method {
            Core::Pix => Self::Pix,
            Core::CartaoCredito => Self::CartaoCredito,
            Core::Boleto => Self::Boleto,
            Core::Dinheiro => Self::Dinheiro,
        }
    }
}
