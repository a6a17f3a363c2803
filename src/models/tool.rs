//! The catalog of audit tools offered by the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the five audit calculators.
///
/// Tools are identified by a kebab-case id that doubles as their route.
///
/// # Example
///
/// ```
/// use audit_engine::models::AuditTool;
///
/// let tool = AuditTool::from_id("bank-vouching").unwrap();
/// assert_eq!(tool, AuditTool::BankVouching);
/// assert_eq!(tool.route(), "/bank-vouching");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditTool {
    /// Progressive tax computation and compliance check.
    TaxAudit,
    /// Reported versus actual salary comparison.
    SalaryReconciliation,
    /// Declared versus verified professional tax.
    ProfessionalTax,
    /// Book versus audited opening balances.
    OpeningBalance,
    /// Bank statement versus cash book.
    BankVouching,
}

impl AuditTool {
    /// All tools in dashboard order.
    pub const ALL: [AuditTool; 5] = [
        AuditTool::TaxAudit,
        AuditTool::SalaryReconciliation,
        AuditTool::ProfessionalTax,
        AuditTool::OpeningBalance,
        AuditTool::BankVouching,
    ];

    /// Looks a tool up by its id.
    pub fn from_id(id: &str) -> Result<Self, EngineError> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.id() == id)
            .ok_or_else(|| EngineError::ToolNotFound { id: id.to_string() })
    }

    /// The kebab-case identifier.
    pub fn id(&self) -> &'static str {
        match self {
            AuditTool::TaxAudit => "tax-audit",
            AuditTool::SalaryReconciliation => "salary-reconciliation",
            AuditTool::ProfessionalTax => "professional-tax",
            AuditTool::OpeningBalance => "opening-balance",
            AuditTool::BankVouching => "bank-vouching",
        }
    }

    /// The route the tool is served under.
    pub fn route(&self) -> String {
        format!("/{}", self.id())
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            AuditTool::TaxAudit => "Tax Audit Verification",
            AuditTool::SalaryReconciliation => "Salary Reconciliation",
            AuditTool::ProfessionalTax => "Professional Tax Reconciliation",
            AuditTool::OpeningBalance => "Opening Balance Verification",
            AuditTool::BankVouching => "Bank Vouching",
        }
    }

    /// One-line summary.
    pub fn description(&self) -> &'static str {
        match self {
            AuditTool::TaxAudit => "Upload and analyze tax documents for compliance verification",
            AuditTool::SalaryReconciliation => {
                "Compare and reconcile reported vs actual salary data"
            }
            AuditTool::ProfessionalTax => "Verify professional tax declarations and payments",
            AuditTool::OpeningBalance => "Verify accuracy of opening balance figures",
            AuditTool::BankVouching => "Reconcile bank statements with cash book records",
        }
    }

    /// Longer explanation of what the tool covers.
    pub fn long_description(&self) -> &'static str {
        match self {
            AuditTool::TaxAudit => {
                "Comprehensive tax calculation verification with compliance checking, risk assessment, and actionable recommendations for tax optimization."
            }
            AuditTool::SalaryReconciliation => {
                "Advanced salary variance analysis with detailed reconciliation reports, adjustment recommendations, and compliance verification."
            }
            AuditTool::ProfessionalTax => {
                "Professional tax compliance verification with penalty assessment, payment tracking, and regulatory compliance monitoring."
            }
            AuditTool::OpeningBalance => {
                "Comprehensive balance verification with materiality assessment, variance analysis, and adjustment entry generation."
            }
            AuditTool::BankVouching => {
                "Advanced bank reconciliation with automated vouching, discrepancy identification, and comprehensive audit trail."
            }
        }
    }

    /// Feature labels shown on the dashboard card.
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            AuditTool::TaxAudit => &[
                "Progressive Tax Calculation",
                "Compliance Checking",
                "Risk Assessment",
                "Document Analysis",
            ],
            AuditTool::SalaryReconciliation => &[
                "Variance Analysis",
                "Adjustment Detection",
                "Compliance Review",
                "Detailed Reporting",
            ],
            AuditTool::ProfessionalTax => &[
                "Declaration Verification",
                "Penalty Assessment",
                "Payment Tracking",
                "Compliance Monitoring",
            ],
            AuditTool::OpeningBalance => &[
                "Materiality Assessment",
                "Variance Analysis",
                "Risk Evaluation",
                "Adjustment Entries",
            ],
            AuditTool::BankVouching => &[
                "Automated Reconciliation",
                "Discrepancy Detection",
                "Risk Assessment",
                "Audit Trail",
            ],
        }
    }

    /// Kinds of source documents the tool works from.
    pub fn accepted_documents(&self) -> &'static [&'static str] {
        match self {
            AuditTool::TaxAudit => &["Cash Flow Statement", "Cash book statement"],
            AuditTool::SalaryReconciliation => &["Salary Registers", "Salary Ledgers"],
            AuditTool::ProfessionalTax => &[
                "Salary Ledgers",
                "Salary Registers",
                "Pt Challans",
                "Pt registers",
            ],
            AuditTool::OpeningBalance => &["Trial Balance", "Balance"],
            AuditTool::BankVouching => &[
                "Bank Statements",
                "Cash Books",
                "Passbooks",
                "Journal Entries",
            ],
        }
    }

    /// Upload slots the documents endpoint expects, in order.
    ///
    /// Comparison tools take one slot per side and need both filled; the
    /// tax audit takes a single slot.
    pub fn upload_slots(&self) -> &'static [UploadSlot] {
        match self {
            AuditTool::TaxAudit => &[UploadSlot {
                label: "Tax Documents",
                max_files: 5,
            }],
            AuditTool::SalaryReconciliation => &[
                UploadSlot {
                    label: "Reported Salary Documents",
                    max_files: 3,
                },
                UploadSlot {
                    label: "Actual Salary Documents",
                    max_files: 3,
                },
            ],
            AuditTool::ProfessionalTax => &[
                UploadSlot {
                    label: "Declared Professional Tax Documents",
                    max_files: 3,
                },
                UploadSlot {
                    label: "Verified Professional Tax Documents",
                    max_files: 3,
                },
            ],
            AuditTool::OpeningBalance => &[
                UploadSlot {
                    label: "Book Balance Documents",
                    max_files: 3,
                },
                UploadSlot {
                    label: "Audited Balance Documents",
                    max_files: 3,
                },
            ],
            AuditTool::BankVouching => &[
                UploadSlot {
                    label: "Bank Statement Documents",
                    max_files: 5,
                },
                UploadSlot {
                    label: "Cash Book Documents",
                    max_files: 5,
                },
            ],
        }
    }

    /// Builds the serializable catalog entry for this tool.
    pub fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            id: *self,
            title: self.title(),
            description: self.description(),
            long_description: self.long_description(),
            features: self.features(),
            accepted_documents: self.accepted_documents(),
            upload_slots: self.upload_slots(),
            route: self.route(),
        }
    }
}

impl fmt::Display for AuditTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AuditTool {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

/// A named group of documents uploaded for one side of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSlot {
    /// Label shown next to the upload control.
    pub label: &'static str,
    /// Most files the slot takes in one upload.
    pub max_files: usize,
}

/// Catalog entry describing a tool.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// The tool this entry describes.
    pub id: AuditTool,
    /// Human-readable title.
    pub title: &'static str,
    /// One-line summary.
    pub description: &'static str,
    /// Longer explanation.
    pub long_description: &'static str,
    /// Feature labels.
    pub features: &'static [&'static str],
    /// Accepted source document kinds.
    pub accepted_documents: &'static [&'static str],
    /// Upload slots, primary first.
    pub upload_slots: &'static [UploadSlot],
    /// Route of the calculator endpoint.
    pub route: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tool_round_trips_through_its_id() {
        for tool in AuditTool::ALL {
            assert_eq!(AuditTool::from_id(tool.id()).unwrap(), tool);
        }
    }

    #[test]
    fn test_unknown_id_returns_tool_not_found() {
        match AuditTool::from_id("payroll") {
            Err(EngineError::ToolNotFound { id }) => assert_eq!(id, "payroll"),
            other => panic!("Expected ToolNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_uses_kebab_case_ids() {
        assert_eq!(
            serde_json::to_string(&AuditTool::SalaryReconciliation).unwrap(),
            "\"salary-reconciliation\""
        );
        let tool: AuditTool = serde_json::from_str("\"opening-balance\"").unwrap();
        assert_eq!(tool, AuditTool::OpeningBalance);
    }

    #[test]
    fn test_every_tool_lists_four_features() {
        for tool in AuditTool::ALL {
            assert_eq!(tool.features().len(), 4, "{}", tool);
            assert!(!tool.accepted_documents().is_empty());
        }
    }

    #[test]
    fn test_descriptor_serializes_camel_case() {
        let json = serde_json::to_value(AuditTool::TaxAudit.descriptor()).unwrap();
        assert_eq!(json["id"], "tax-audit");
        assert_eq!(json["route"], "/tax-audit");
        assert_eq!(json["acceptedDocuments"][0], "Cash Flow Statement");
        assert!(json["longDescription"].as_str().unwrap().contains("compliance"));
        assert_eq!(json["uploadSlots"][0]["label"], "Tax Documents");
        assert_eq!(json["uploadSlots"][0]["maxFiles"], 5);
    }

    #[test]
    fn test_comparison_tools_have_two_upload_slots() {
        assert_eq!(AuditTool::TaxAudit.upload_slots().len(), 1);
        for tool in &AuditTool::ALL[1..] {
            assert_eq!(tool.upload_slots().len(), 2, "{}", tool);
        }

        let salary = AuditTool::SalaryReconciliation.upload_slots();
        assert_eq!(salary[0].label, "Reported Salary Documents");
        assert_eq!(salary[1].label, "Actual Salary Documents");
        assert_eq!(salary[1].max_files, 3);

        let bank = AuditTool::BankVouching.upload_slots();
        assert_eq!(bank[0].max_files, 5);
        assert_eq!(bank[1].label, "Cash Book Documents");
    }
}
