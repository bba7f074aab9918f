//! Mapping between domain budgets and public DTOs.

use crate::backend::domain::models::budget::{Budget as DomainBudget, CycleType as DomainCycleType};

pub struct BudgetMapper;

impl BudgetMapper {
    pub fn to_dto(budget: DomainBudget) -> shared::Budget {
        shared::Budget {
            id: budget.id,
            name: budget.name,
            amount: budget.amount,
            start_date: budget.start_date,
            cycle_type: Self::cycle_type_to_dto(budget.cycle_type),
            cycle_value: budget.cycle_value,
            active: budget.active,
        }
    }

    pub fn cycle_type_to_dto(cycle_type: DomainCycleType) -> shared::CycleType {
        match cycle_type {
            DomainCycleType::Monthly => shared::CycleType::Monthly,
            DomainCycleType::Weekly => shared::CycleType::Weekly,
        }
    }

    pub fn cycle_type_to_domain(cycle_type: shared::CycleType) -> DomainCycleType {
        match cycle_type {
            shared::CycleType::Monthly => DomainCycleType::Monthly,
            shared::CycleType::Weekly => DomainCycleType::Weekly,
        }
    }
}
