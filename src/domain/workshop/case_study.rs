//! Case studies for group discussion.

use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A scenario with discussion prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub id: u8,
    pub title: &'static str,
    pub scenario: &'static [&'static str],
    pub questions: [&'static str; 3],
    pub key_issues: [&'static str; 4],
}

impl CaseStudy {
    /// Selector label, e.g. `Case 2: The Salary Secret`.
    pub fn label(&self) -> String {
        format!("Case {}: {}", self.id, self.title)
    }
}

static CASE_STUDIES: [CaseStudy; 5] = [
    CaseStudy {
        id: 1,
        title: "The Invisible Candidate",
        scenario: &[
            "Dr. Sarah, a senior researcher with an impressive publication record in entomology, recently applied for the position of Department Head. Despite her strong publication record and successful grant history, she consistently finds herself on the shortlist but never selected.",
            "During a recent recruitment, she overheard colleagues suggesting she might not be 'assertive enough' to lead the department, and that her family responsibilities might interfere with leadership duties.",
            "Meanwhile, a male colleague with fewer publications but known for his confident presentation style is being strongly considered for the position.",
        ],
        questions: [
            "What biases are present in this hiring decision?",
            "How do stereotypes about leadership impact women's career growth?",
            "What organizational policies could prevent such biased hiring?",
        ],
        key_issues: [
            "Gender stereotypes about leadership qualities",
            "Assumptions about family responsibilities",
            "Valuing style over substance in leadership assessment",
            "Implicit bias in evaluation criteria",
        ],
    },
    CaseStudy {
        id: 2,
        title: "The Salary Secret",
        scenario: &[
            "During an informal lunch discussion, three researchers at a research organization discover significant differences in their starting salaries despite similar qualifications and experience.",
            "Dr. James started at $5,000 higher than Dr. Lucy, though both joined the same project last year with comparable expertise. Dr. Lucy learns that James negotiated his salary aggressively while she accepted the first offer, having been previously advised to 'be grateful' for opportunities.",
            "The conversation reveals a pattern where female colleagues consistently started at lower salary points, creating a compounding effect on their career earnings.",
        ],
        questions: [
            "What structural issues enable gender pay disparities to persist?",
            "Why do women often face challenges in salary negotiations?",
            "What policies could create more equitable compensation?",
        ],
        key_issues: [
            "Lack of salary transparency",
            "Gendered expectations in negotiation",
            "Socialization differences that affect negotiation behavior",
            "Compounding effects of initial pay disparities",
        ],
    },
    CaseStudy {
        id: 3,
        title: "The Broken Ladder",
        scenario: &[
            "At an organization's annual research symposium, Dr. Grace notices that while 45% of junior researchers are women, only 15% of research department heads are female.",
            "When a leadership position opens in her department, she witnesses a familiar pattern: senior female researchers are directed toward 'support roles' like committee work and mentoring, while male colleagues are encouraged to pursue executive positions.",
            "Despite her strong track record in both research and team management, she's advised to 'gain more experience' before pursuing leadership roles.",
        ],
        questions: [
            "How do informal mentoring and guidance differ by gender?",
            "What role do institutional networks play in leadership advancement?",
            "How can leadership development be made more inclusive?",
        ],
        key_issues: [
            "Pipeline problems vs. 'leaky bucket' issues",
            "Gender differences in mentoring and sponsorship",
            "Hidden workload of service activities for women",
            "Moving goalposts for advancement requirements",
        ],
    },
    CaseStudy {
        id: 4,
        title: "The Dedicated Father vs. Distracted Mother",
        scenario: &[
            "Two researchers at a research organization, Thomas and Diana, both have young children.",
            "When Thomas leaves early for his child's school event, colleagues praise him as a 'dedicated father.' When Diana does the same, subtle comments arise about her 'divided priorities.'",
            "During fieldwork planning, assumptions are made about Diana's availability for extended field visits, while Thomas's parental status is never mentioned.",
            "The situation intensifies when both apply for project leadership roles, and concerns about Diana's 'reliability' are raised due to her family responsibilities.",
        ],
        questions: [
            "How do gendered expectations about caregiving affect career progression?",
            "Why are similar actions interpreted differently based on gender?",
            "What policies could address these double standards?",
        ],
        key_issues: [
            "Double standards for parenting responsibilities",
            "Different narratives for the same behavior based on gender",
            "Unexamined assumptions about availability and commitment",
            "How 'ideal worker' norms disadvantage women",
        ],
    },
    CaseStudy {
        id: 5,
        title: "The Diversity Hire",
        scenario: &[
            "Dr. Aisha, a young female researcher from Northern Kenya, joins an organization's climate change adaptation project.",
            "Despite her innovative research approach and strong academic background, she frequently encounters colleagues who assume she was hired to 'tick boxes.' She faces multiple layers of bias - some question her expertise because of her gender, others make assumptions about her background, and she often finds herself having to repeatedly prove her competence.",
            "During team meetings, she notices her suggestions gain traction only when repeated by others.",
        ],
        questions: [
            "How do multiple aspects of identity impact workplace experiences?",
            "What are the cumulative effects of facing multiple forms of bias?",
            "How can organizations address intersectional challenges?",
        ],
        key_issues: [
            "Intersectionality of gender, ethnicity, and age biases",
            "Stereotype threat and its impact on performance",
            "Tokenism and its psychological burden",
            "'Prove it again' bias affecting marginalized groups",
        ],
    },
];

/// Read-only library of the workshop's case studies.
pub struct CaseStudyLibrary;

impl CaseStudyLibrary {
    /// Returns all case studies in presentation order.
    pub fn all() -> &'static [CaseStudy] {
        &CASE_STUDIES
    }

    /// Finds a case study by id.
    pub fn find(id: u8) -> Option<&'static CaseStudy> {
        CASE_STUDIES.iter().find(|c| c.id == id)
    }

    /// Finds a case study by id, failing with `CaseStudyNotFound`.
    pub fn get(id: u8) -> Result<&'static CaseStudy, DomainError> {
        Self::find(id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::CaseStudyNotFound,
                format!("Case study {} not found", id),
            )
            .with_detail("case_id", id.to_string())
        })
    }
}
