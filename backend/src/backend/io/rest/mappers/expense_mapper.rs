//! Mapping between domain expenses and public DTOs.

use crate::backend::domain::models::expense::Expense as DomainExpense;

pub struct ExpenseMapper;

impl ExpenseMapper {
    pub fn to_dto(expense: DomainExpense) -> shared::Expense {
        shared::Expense {
            id: expense.id,
            title: expense.title,
            amount: expense.amount,
            category: expense.category,
            note: expense.note,
            date: expense.date,
            time: expense.time,
        }
    }
}
