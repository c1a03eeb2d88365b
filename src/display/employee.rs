//! Employee and attendance display formatting

use crate::models::{AttendanceRecord, Employee};
use crate::services::EmployeeBalanceInfo;

/// Format a list of employees as a table
pub fn format_employee_list(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No employees found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:25} {:20} {:>12} {:10}\n",
        "Name", "Position", "Base Salary", "Hired"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for employee in employees {
        output.push_str(&format!(
            "{:25} {:20} {:>12} {}\n",
            truncate(&employee.name, 25),
            truncate(&employee.position, 20),
            format!("{}", employee.base_salary),
            employee.hire_date.format("%Y-%m-%d")
        ));
    }

    output
}

/// Format full employee details for display
pub fn format_employee_details(employee: &Employee) -> String {
    let mut output = String::new();

    output.push_str(&format!("Employee:    {}\n", employee.id));
    output.push_str(&format!("Name:        {}\n", employee.name));
    if !employee.email.is_empty() {
        output.push_str(&format!("Email:       {}\n", employee.email));
    }
    output.push_str(&format!("Position:    {}\n", employee.position));
    output.push_str(&format!("Base salary: {}\n", employee.base_salary));
    output.push_str(&format!(
        "Hired:       {}\n",
        employee.hire_date.format("%Y-%m-%d")
    ));

    output
}

/// Format an employee balance view
pub fn format_employee_balance(employee: &Employee, info: &EmployeeBalanceInfo) -> String {
    let mut output = String::new();

    output.push_str(&format!("Balance for {}\n", employee.name));
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!("{:>24} {:>12}\n", "Base salary:", format!("{}", info.base_salary)));
    output.push_str(&format!(
        "{:>24} {:>12}\n",
        "Transaction balance:",
        format!("{}", info.transaction_balance)
    ));
    output.push_str(&format!(
        "{:>24} {:>12}\n",
        "Current balance:",
        format!("{}", info.current_balance)
    ));

    output
}

/// Format attendance records as a table
pub fn format_attendance_list(records: &[AttendanceRecord]) -> String {
    if records.is_empty() {
        return "No attendance records found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:9} {:>6} {:>6} {:>6} {:>12}\n",
        "Date", "Status", "In", "Out", "OT hrs", "OT pay"
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');

    for record in records {
        let check_in = record
            .check_in
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let check_out = record
            .check_out
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{} {:9} {:>6} {:>6} {:>6.1} {:>12}\n",
            record.date.format("%Y-%m-%d"),
            record.status.to_string(),
            check_in,
            check_out,
            record.overtime_hours,
            format!("{}", record.overtime_pay())
        ));
    }

    output
}

// Char-counting so multibyte names never split mid-character
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
