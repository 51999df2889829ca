/// Display-only fixture row for the invoices table
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: u32,
    pub client: &'static str,
    pub email: &'static str,
    pub cost: f64,
    pub date: &'static str,
}

/// Sum of all open invoice amounts, shown in the table footer
pub fn outstanding_total(invoices: &[Invoice]) -> f64 {
    invoices.iter().map(|invoice| invoice.cost).sum()
}

/// Fixture rows shown on the invoices page
pub fn sample_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: 1,
            client: "Jon Snow",
            email: "jonsnow@gmail.com",
            cost: 21.24,
            date: "03/12/2025",
        },
        Invoice {
            id: 2,
            client: "Cersei Lannister",
            email: "cerseilannister@gmail.com",
            cost: 1.24,
            date: "06/15/2025",
        },
        Invoice {
            id: 3,
            client: "Jaime Lannister",
            email: "jaimelannister@gmail.com",
            cost: 11.24,
            date: "05/02/2025",
        },
        Invoice {
            id: 4,
            client: "Anya Stark",
            email: "anyastark@gmail.com",
            cost: 80.55,
            date: "03/21/2025",
        },
        Invoice {
            id: 5,
            client: "Daenerys Targaryen",
            email: "daenerystargaryen@gmail.com",
            cost: 1.24,
            date: "01/12/2025",
        },
        Invoice {
            id: 6,
            client: "Ever Melisandre",
            email: "evermelisandre@gmail.com",
            cost: 63.12,
            date: "11/02/2024",
        },
        Invoice {
            id: 7,
            client: "Ferrara Clifford",
            email: "ferraraclifford@gmail.com",
            cost: 52.42,
            date: "02/11/2025",
        },
        Invoice {
            id: 8,
            client: "Rossini Frances",
            email: "rossinifrances@gmail.com",
            cost: 21.24,
            date: "05/02/2025",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_every_row() {
        let rows = sample_invoices();
        let total = outstanding_total(&rows);
        let expected: f64 = rows.iter().map(|r| r.cost).sum();
        assert!((total - expected).abs() < f64::EPSILON);
        assert!(total > 0.0);
    }

    #[test]
    fn total_of_nothing_is_zero() {
        assert_eq!(outstanding_total(&[]), 0.0);
    }
}
