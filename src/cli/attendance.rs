//! Attendance CLI commands
//!
//! Implements CLI commands for recording and listing attendance.

use chrono::NaiveTime;
use clap::Subcommand;

use crate::display::format_attendance_list;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AttendanceRecord, AttendanceStatus, Money};
use crate::services::EmployeeService;
use crate::storage::Storage;

use super::parse_date;

/// Attendance subcommands
#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// Record one day of attendance for an employee
    Record {
        /// Employee name
        name: String,
        /// Status (present, absent, half-day)
        status: String,
        /// The day being recorded (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Clock-in time (HH:MM), required unless absent
        #[arg(long)]
        check_in: Option<String>,
        /// Clock-out time (HH:MM), required unless absent
        #[arg(long)]
        check_out: Option<String>,
        /// Overtime hours worked
        #[arg(long, default_value = "0")]
        overtime_hours: f64,
        /// Hourly overtime rate (e.g., "20.00")
        #[arg(long, default_value = "0")]
        overtime_rate: String,
        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List an employee's attendance history
    List {
        /// Employee name
        name: String,
    },
}

/// Handle an attendance command
pub fn handle_attendance_command(storage: &Storage, cmd: AttendanceCommands) -> LedgerResult<()> {
    let service = EmployeeService::new(storage);

    match cmd {
        AttendanceCommands::Record {
            name,
            status,
            date,
            check_in,
            check_out,
            overtime_hours,
            overtime_rate,
            notes,
        } => {
            let employee = service.get_by_name(&name)?;
            let status = AttendanceStatus::parse(&status).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Invalid status: '{}'. Valid statuses: present, absent, half-day",
                    status
                ))
            })?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let mut record = AttendanceRecord::new(employee.id, date, status);
            record.check_in = check_in.as_deref().map(parse_time).transpose()?;
            record.check_out = check_out.as_deref().map(parse_time).transpose()?;
            record.overtime_hours = overtime_hours;
            record.overtime_rate = Money::parse(&overtime_rate).map_err(|e| {
                LedgerError::Validation(format!(
                    "Invalid overtime rate: '{}'. Error: {}",
                    overtime_rate, e
                ))
            })?;
            if let Some(notes) = notes {
                record.notes = notes;
            }

            let created = service.record_attendance(record)?;
            println!(
                "Recorded {} for {} on {}",
                created.status, employee.name, created.date
            );
            if created.overtime_pay().is_positive() {
                println!("  Overtime pay: {}", created.overtime_pay());
            }
        }

        AttendanceCommands::List { name } => {
            let employee = service.get_by_name(&name)?;
            let records = service.list_attendance(employee.id)?;
            println!("Attendance for {}", employee.name);
            print!("{}", format_attendance_list(&records));
        }
    }

    Ok(())
}

fn parse_time(s: &str) -> LedgerResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| LedgerError::Validation(format!("Invalid time: '{}'. Use HH:MM format", s)))
}
