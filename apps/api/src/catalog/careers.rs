//! Static career catalog consumed by the matchers and the layout engine.
//!
//! The catalog is compiled into the binary and never mutated. `id` is the join
//! key shared with the domain taxonomy and with matching results.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::taxonomy::DEFAULT_EXPLORE_IDS;

static NON_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// Where a career entry came from. Drives dot colour in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerSource {
    Database,
    Ai,
}

/// One of the three emphasis axes the explore view can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Growth,
    Strength,
    Passion,
}

/// Per-career dimension weights, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub growth: f64,
    pub strength: f64,
    pub passion: f64,
}

impl Dimensions {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Growth => self.growth,
            Dimension::Strength => self.strength,
            Dimension::Passion => self.passion,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthArea {
    pub skill: &'static str,
    pub description: &'static str,
}

/// Extra framing for careers that sit at the intersection of several fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolymathMeta {
    pub intersection: &'static str,
    pub why_fit: &'static [&'static str],
    pub proof_task: &'static str,
    pub two_week_experiment: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerNode {
    pub id: &'static str,
    pub title: &'static str,
    pub source: CareerSource,
    pub dimensions: Dimensions,
    pub day_in_life: &'static [&'static str],
    pub growth_areas: &'static [GrowthArea],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polymath_meta: Option<PolymathMeta>,
}

/// Lowercases a title and collapses every run of non-alphanumerics into `-`.
pub fn slug(title: &str) -> String {
    let lower = title.to_lowercase();
    NON_SLUG_RE
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Looks a career up by catalog id or by the slug of its title.
pub fn career_by_id(id: &str) -> Option<&'static CareerNode> {
    CAREER_PATHS
        .iter()
        .find(|career| career.id == id || slug(career.title) == id)
}

/// Returns the full catalog.
pub fn all_careers() -> &'static [CareerNode] {
    CAREER_PATHS
}

/// Careers shown in the explore view, in catalog order.
///
/// A non-empty match list narrows the view to exactly those careers; an empty
/// one shows the curated default set.
pub fn explore_careers(matched_ids: &[&str]) -> Vec<&'static CareerNode> {
    let wanted = if matched_ids.is_empty() {
        DEFAULT_EXPLORE_IDS
    } else {
        matched_ids
    };
    CAREER_PATHS
        .iter()
        .filter(|career| wanted.contains(&career.id))
        .collect()
}

pub static CAREER_PATHS: &[CareerNode] = &[
    CareerNode {
        id: "product-owner",
        title: "Product Owner",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.4, passion: 0.9 },
        day_in_life: &[
            "Prioritize backlog and groom user stories with the team.",
            "Run sprint planning and stakeholder alignment meetings.",
            "Define product vision and roadmap based on user feedback.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Stakeholder Management",
                description: "Your ability to align cross-functional teams provides a strong foundation. Develop deeper negotiation and influence skills to drive product decisions across larger organizations.",
            },
            GrowthArea {
                skill: "Data-Driven Decisions",
                description: "Understanding metrics and A/B testing will help you validate product hypotheses. Build proficiency in analytics tools and experimentation frameworks.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "data-scientist",
        title: "Data Scientist",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.95, strength: 0.8, passion: 0.7 },
        day_in_life: &[
            "Build and tune ML models for predictive analytics.",
            "Clean and explore datasets to uncover insights.",
            "Present findings and recommendations to stakeholders.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Machine Learning",
                description: "Your statistical foundation supports model development. Expand into deep learning and NLP for broader impact.",
            },
            GrowthArea {
                skill: "Data Engineering",
                description: "Understanding pipelines and data quality will scale your work. Learn Spark, Airflow, or similar tools.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "robotics-technician",
        title: "Robotics Technician",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.6, strength: 0.95, passion: 0.5 },
        day_in_life: &[
            "Assemble and install robotic systems according to design specifications.",
            "Perform routine maintenance and calibration on robotic equipment to ensure optimal performance.",
            "Troubleshoot and repair mechanical, electrical, and software issues within robotic systems.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "PLC Programming",
                description: "Your experience with software systems provides a strong foundation for PLC logic and structure. Develop proficiency in PLC languages and hardware to control robotic systems.",
            },
            GrowthArea {
                skill: "Mechanical Aptitude",
                description: "Understanding mechanical systems and diagnostics will help you troubleshoot faster. Focus on hydraulics, pneumatics, and mechanical assembly.",
            },
            GrowthArea {
                skill: "Robotics Maintenance",
                description: "Expand your knowledge of preventive maintenance schedules and predictive diagnostics for industrial robots.",
            },
            GrowthArea {
                skill: "Welding Skills",
                description: "Basic welding and fabrication skills support repair and modification of robotic fixtures and enclosures.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "software-developer",
        title: "Software Developer / Engineer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.8, strength: 0.9, passion: 0.6 },
        day_in_life: &[
            "Write, review, and deploy code for new features and bug fixes.",
            "Collaborate with product and design on technical requirements.",
            "Participate in code reviews and architecture discussions.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "System Design",
                description: "Scaling from features to systems requires understanding distributed systems, caching, and scalability patterns.",
            },
            GrowthArea {
                skill: "DevOps Practices",
                description: "CI/CD, containerization, and observability will help you ship faster and more reliably.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "machine-learning-engineer",
        title: "Machine Learning Engineer",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.95, strength: 0.85, passion: 0.8 },
        day_in_life: &[
            "Design and train ML models for production use cases.",
            "Build pipelines for data ingestion, preprocessing, and model serving.",
            "Monitor model performance and iterate on improvements.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "MLOps",
                description: "Deploying and maintaining models at scale requires versioning, monitoring, and automated retraining pipelines.",
            },
            GrowthArea {
                skill: "Distributed Training",
                description: "Training large models efficiently demands knowledge of PyTorch/TensorFlow distributed workflows.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "ai-engineer",
        title: "AI Engineer",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.9, strength: 0.8, passion: 0.85 },
        day_in_life: &[
            "Integrate LLMs and AI APIs into applications.",
            "Fine-tune models for domain-specific tasks.",
            "Optimize inference latency and cost.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Prompt Engineering",
                description: "Mastering prompt design and RAG patterns unlocks practical AI applications quickly.",
            },
            GrowthArea {
                skill: "Model Fine-Tuning",
                description: "LoRA, adapter layers, and instruction tuning will let you customize models for your use case.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "robotics-engineer",
        title: "Robotics Engineer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.85, strength: 0.9, passion: 0.7 },
        day_in_life: &[
            "Design robotic systems and select hardware components.",
            "Develop control algorithms and simulation models.",
            "Test and validate systems in lab and field environments.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "ROS/ROS2",
                description: "Robot Operating System is the standard for robotics software. Build projects with perception, planning, and control stacks.",
            },
            GrowthArea {
                skill: "Computer Vision",
                description: "Sensors and perception are core to robotics. Learn object detection, SLAM, and 3D vision.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "data-engineer",
        title: "Data Engineer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.75, strength: 0.9, passion: 0.5 },
        day_in_life: &[
            "Design and build data pipelines and ETL workflows.",
            "Maintain data warehouses and lakehouses.",
            "Ensure data quality, governance, and documentation.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Stream Processing",
                description: "Real-time data demands Kafka, Flink, or similar. Learn event-driven architectures.",
            },
            GrowthArea {
                skill: "Data Modeling",
                description: "Dimensional modeling and data vault patterns help you design scalable schemas.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "cloud-engineer",
        title: "Cloud Engineer",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.8, strength: 0.85, passion: 0.5 },
        day_in_life: &[
            "Manage cloud infrastructure and deployment automation.",
            "Implement security, networking, and cost optimization.",
            "Support development teams with platform services.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Infrastructure as Code",
                description: "Terraform, Pulumi, or CDK will help you manage cloud resources reliably and at scale.",
            },
            GrowthArea {
                skill: "Kubernetes",
                description: "Container orchestration is essential for modern cloud-native systems.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "devops-engineer",
        title: "DevOps Engineer",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.7, strength: 0.95, passion: 0.5 },
        day_in_life: &[
            "Automate CI/CD pipelines and deployment workflows.",
            "Monitor system health and troubleshoot incidents.",
            "Improve developer experience and tooling.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Observability",
                description: "Metrics, logs, and traces form the foundation. Master OpenTelemetry and modern APM tools.",
            },
            GrowthArea {
                skill: "SRE Practices",
                description: "SLIs, SLOs, error budgets, and blameless postmortems will mature your operations.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "ai-product-manager",
        title: "AI Product Manager",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.85, strength: 0.5, passion: 0.95 },
        day_in_life: &[
            "Define AI product strategy and roadmaps.",
            "Work with eng and research to prioritize model capabilities.",
            "Evaluate ethical implications and user trust.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "AI/ML Fundamentals",
                description: "Understanding model capabilities and limitations helps you scope realistic product features.",
            },
            GrowthArea {
                skill: "Responsible AI",
                description: "Bias, fairness, and explainability are critical for trusted AI products.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "web-developer",
        title: "Web Developer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.9, passion: 0.6 },
        day_in_life: &[
            "Build responsive UIs with modern frameworks.",
            "Implement APIs and integrate with backends.",
            "Optimize performance and accessibility.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Full-Stack Depth",
                description: "Expand from frontend to backend and databases for end-to-end ownership.",
            },
            GrowthArea {
                skill: "Web Performance",
                description: "Core Web Vitals, lazy loading, and bundle optimization improve user experience.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "environmental-engineer",
        title: "Environmental Engineer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.6, strength: 0.7, passion: 0.95 },
        day_in_life: &[
            "Design systems for pollution control and resource management.",
            "Conduct environmental impact assessments.",
            "Ensure compliance with regulations and sustainability goals.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Sustainability Metrics",
                description: "Life cycle assessment and carbon accounting support data-driven sustainability decisions.",
            },
            GrowthArea {
                skill: "Regulatory Knowledge",
                description: "Stay current with EPA, local, and international environmental regulations.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "quantitative-analyst",
        title: "Quantitative Analyst (Quant)",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.9, strength: 0.95, passion: 0.6 },
        day_in_life: &[
            "Develop quantitative models for trading and risk.",
            "Backtest strategies and analyze market data.",
            "Collaborate with traders and portfolio managers.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Statistical Arbitrage",
                description: "Advanced time series and signal processing support alpha generation.",
            },
            GrowthArea {
                skill: "Risk Management",
                description: "VaR, stress testing, and portfolio optimization are essential quant skills.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "software-architect",
        title: "Software Architect",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.8, strength: 0.9, passion: 0.7 },
        day_in_life: &[
            "Design system architecture and technical standards.",
            "Evaluate technologies and drive adoption decisions.",
            "Mentor engineers and conduct architecture reviews.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Domain-Driven Design",
                description: "DDD helps align architecture with business domains and bounded contexts.",
            },
            GrowthArea {
                skill: "Distributed Systems",
                description: "Consistency, partitioning, and failure handling are core to scalable designs.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "hardware-engineer",
        title: "Hardware Engineer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.95, passion: 0.6 },
        day_in_life: &[
            "Design circuits and PCB layouts.",
            "Prototype and test hardware iterations.",
            "Work with manufacturing on production processes.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "FPGA/ASIC",
                description: "Digital design and HDL skills enable custom silicon and acceleration.",
            },
            GrowthArea {
                skill: "Signal Integrity",
                description: "High-speed design requires understanding of EMI, impedance, and layout best practices.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "embedded-systems-engineer",
        title: "Embedded Systems Engineer",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.75, strength: 0.95, passion: 0.6 },
        day_in_life: &[
            "Develop firmware for microcontrollers and SoCs.",
            "Optimize for power, latency, and real-time constraints.",
            "Debug hardware-software interactions.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "RTOS",
                description: "Real-time operating systems like FreeRTOS and Zephyr are standard for embedded.",
            },
            GrowthArea {
                skill: "Low-Power Design",
                description: "Battery and IoT devices demand power profiling and optimization.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "robotics-software-engineer",
        title: "Robotics Software Engineer",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.9, strength: 0.9, passion: 0.75 },
        day_in_life: &[
            "Implement perception, planning, and control algorithms.",
            "Integrate sensors and actuation in simulation and real robots.",
            "Deploy and maintain robots in production environments.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Motion Planning",
                description: "Path planning, trajectory optimization, and collision avoidance are core robotics skills.",
            },
            GrowthArea {
                skill: "Sensor Fusion",
                description: "Combining lidar, camera, and IMU data improves perception robustness.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "business-intelligence",
        title: "Business Intelligence Architect / Developer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.6, strength: 0.8, passion: 0.6 },
        day_in_life: &[
            "Design dashboards and reports for business users.",
            "Model data for analytics and self-service BI.",
            "Optimize queries and data refresh pipelines.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Data Modeling",
                description: "Star schemas, slowly changing dimensions, and semantic layers power effective BI.",
            },
            GrowthArea {
                skill: "Visualization Design",
                description: "Effective dashboards tell a story. Study information design and user needs.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "computer-scientist",
        title: "Computer Scientist",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.95, strength: 0.85, passion: 0.8 },
        day_in_life: &[
            "Conduct research in algorithms, systems, or AI.",
            "Publish papers and present at conferences.",
            "Collaborate with industry and academia.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Research Methodology",
                description: "Rigorous experiments, baselines, and reproducibility strengthen your research impact.",
            },
            GrowthArea {
                skill: "Academic Writing",
                description: "Clear technical writing and storytelling amplify your contributions.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "network-engineer",
        title: "Network Engineer / Architect",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.6, strength: 0.9, passion: 0.5 },
        day_in_life: &[
            "Design and maintain network infrastructure.",
            "Troubleshoot connectivity and performance issues.",
            "Implement security policies and monitoring.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Cloud Networking",
                description: "VPCs, load balancers, and SD-WAN extend networking into the cloud.",
            },
            GrowthArea {
                skill: "Network Automation",
                description: "Ansible, Netmiko, and API-driven config reduce manual toil.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "sales-engineer",
        title: "Sales Engineer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.5, strength: 0.7, passion: 0.85 },
        day_in_life: &[
            "Demonstrate products and technical solutions to prospects.",
            "Support sales with technical responses and POCs.",
            "Bridge between product, engineering, and customers.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Technical Storytelling",
                description: "Translating features into business value and use cases wins deals.",
            },
            GrowthArea {
                skill: "Discovery and Scoping",
                description: "Asking the right questions helps you design winning solutions.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "manufacturing-engineer",
        title: "Manufacturing Engineer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.5, strength: 0.9, passion: 0.5 },
        day_in_life: &[
            "Optimize production processes and quality control.",
            "Design fixtures and tooling for assembly lines.",
            "Implement lean and continuous improvement.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Automation",
                description: "PLC, robotics, and MES integration modernize manufacturing.",
            },
            GrowthArea {
                skill: "Quality Systems",
                description: "Six Sigma, SPC, and root cause analysis improve yield and reliability.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "industrial-engineer",
        title: "Industrial Engineer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.6, strength: 0.85, passion: 0.5 },
        day_in_life: &[
            "Analyze workflows and optimize operations.",
            "Design layouts and process improvements.",
            "Reduce waste and improve efficiency.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Simulation",
                description: "Discrete event simulation models complex systems before implementation.",
            },
            GrowthArea {
                skill: "Supply Chain",
                description: "Understanding end-to-end supply chains supports broader optimization.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "mobile-developer",
        title: "Mobile Applications Developer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.9, passion: 0.6 },
        day_in_life: &[
            "Build native or cross-platform mobile apps.",
            "Implement UI/UX and integrate backend APIs.",
            "Optimize performance and battery usage.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Cross-Platform",
                description: "React Native, Flutter, or Kotlin Multiplatform expand your reach.",
            },
            GrowthArea {
                skill: "Mobile UX",
                description: "Platform guidelines, gestures, and accessibility create polished apps.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "qa-engineer",
        title: "Software QA Engineer / Tester",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.6, strength: 0.85, passion: 0.5 },
        day_in_life: &[
            "Design and execute test plans and cases.",
            "Automate tests and integrate into CI/CD.",
            "Report bugs and verify fixes.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Test Automation",
                description: "Selenium, Playwright, or similar tools scale your testing.",
            },
            GrowthArea {
                skill: "Performance Testing",
                description: "Load and stress testing validate non-functional requirements.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "computer-programmer",
        title: "Computer Programmer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.65, strength: 0.9, passion: 0.55 },
        day_in_life: &[
            "Write and maintain code for applications.",
            "Debug issues and implement bug fixes.",
            "Collaborate with team on code reviews.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Software Design Patterns",
                description: "Patterns improve maintainability and communication with other developers.",
            },
            GrowthArea {
                skill: "Version Control",
                description: "Git workflows, branching strategies, and code review practices support collaboration.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "validation-engineer",
        title: "Validation Engineer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.5, strength: 0.9, passion: 0.45 },
        day_in_life: &[
            "Validate systems against regulatory and quality requirements.",
            "Document validation protocols and results.",
            "Support audits and compliance activities.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Regulatory Frameworks",
                description: "FDA, GxP, or ISO requirements vary by industry. Build domain knowledge.",
            },
            GrowthArea {
                skill: "Risk Assessment",
                description: "FMEA and risk-based validation prioritize high-impact testing.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "business-analyst",
        title: "Business Analyst",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.75, strength: 0.75, passion: 0.65 },
        day_in_life: &[
            "Gather and document business requirements from stakeholders.",
            "Analyze processes and recommend improvements.",
            "Create reports, user stories, and specifications for development teams.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Requirements Elicitation",
                description: "Master techniques like workshops, interviews, and prototyping to uncover true business needs.",
            },
            GrowthArea {
                skill: "Process Modeling",
                description: "BPMN, swimlane diagrams, and value stream mapping clarify workflows and bottlenecks.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "data-analyst",
        title: "Data Analyst",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.8, strength: 0.85, passion: 0.6 },
        day_in_life: &[
            "Query databases and build reports to answer business questions.",
            "Create dashboards and visualizations in Tableau, Power BI, or similar.",
            "Identify trends, anomalies, and insights to guide decisions.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "SQL & Statistics",
                description: "Deepen your ability to extract and interpret data with advanced queries and statistical methods.",
            },
            GrowthArea {
                skill: "Storytelling with Data",
                description: "Turn numbers into narratives that drive action. Study design and communication.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "investment-banking-analyst",
        title: "Investment Banking Analyst",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.9, strength: 0.85, passion: 0.65 },
        day_in_life: &[
            "Build financial models and prepare pitch materials for M&A and capital markets.",
            "Conduct due diligence and market research for deals.",
            "Support senior bankers with analysis and client presentations.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Financial Modeling",
                description: "LBO, DCF, and merger models are core to IB. Master Excel and valuation frameworks.",
            },
            GrowthArea {
                skill: "Deal Process",
                description: "Understand the end-to-end process from mandate to closing.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "financial-analyst",
        title: "Financial Analyst",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.75, strength: 0.8, passion: 0.6 },
        day_in_life: &[
            "Build financial models and forecasts.",
            "Analyze company performance, budgets, and investments.",
            "Prepare presentations and recommendations for leadership.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Financial Modeling",
                description: "DCF, LBO, and scenario analysis are core to valuation and planning.",
            },
            GrowthArea {
                skill: "Industry Knowledge",
                description: "Understand sector-specific metrics and drivers to provide relevant analysis.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "product-analyst",
        title: "Product Analyst",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.85, strength: 0.8, passion: 0.7 },
        day_in_life: &[
            "Define metrics and track product performance.",
            "Run A/B tests and analyze experiment results.",
            "Partner with product managers to inform roadmap decisions.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Experiment Design",
                description: "Learn statistical rigor for experiments—power, significance, and causal inference.",
            },
            GrowthArea {
                skill: "Product Sense",
                description: "Combine data with user research to understand why metrics move.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "sales-development-rep",
        title: "Sales Development Representative (SDR)",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.75, passion: 0.8 },
        day_in_life: &[
            "Research and prospect new leads via outreach (email, calls, LinkedIn).",
            "Qualify opportunities and book meetings for account executives.",
            "Update CRM and track pipeline activity.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Outbound Prospecting",
                description: "Master cold outreach, personalization, and persistence to build a strong pipeline.",
            },
            GrowthArea {
                skill: "Discovery Conversations",
                description: "Ask the right questions to identify fit and pain points before passing to sales.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "account-executive",
        title: "Account Executive",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.65, strength: 0.7, passion: 0.85 },
        day_in_life: &[
            "Conduct discovery calls and demos with prospects.",
            "Navigate negotiations, proposals, and contract cycles.",
            "Meet quota and grow territory revenue.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Objection Handling",
                description: "Learn to address concerns confidently and turn resistance into commitment.",
            },
            GrowthArea {
                skill: "Executive Presence",
                description: "Communicate value to C-level and build trust in complex sales.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "customer-success-manager",
        title: "Customer Success Manager",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.65, strength: 0.7, passion: 0.9 },
        day_in_life: &[
            "Onboard new customers and drive adoption.",
            "Conduct check-ins and business reviews.",
            "Identify expansion opportunities and reduce churn.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Customer Advocacy",
                description: "Turn happy customers into references, case studies, and renewal advocates.",
            },
            GrowthArea {
                skill: "Health Scoring",
                description: "Use usage and engagement data to predict at-risk accounts.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "architect",
        title: "Architect (Building Design)",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.8, passion: 0.9 },
        day_in_life: &[
            "Design buildings and spaces using sketches, models, and CAD/BIM software.",
            "Collaborate with clients, engineers, and contractors.",
            "Ensure designs meet codes, budgets, and sustainability standards.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "BIM & Parametric Design",
                description: "Revit, Rhino, and Grasshopper enable complex, data-driven designs.",
            },
            GrowthArea {
                skill: "Sustainable Design",
                description: "LEED, passive house, and net-zero principles shape the future of buildings.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "interior-designer",
        title: "Interior Designer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.6, strength: 0.7, passion: 0.95 },
        day_in_life: &[
            "Plan layouts, select materials, and specify furnishings.",
            "Create mood boards and 3D visualizations for clients.",
            "Coordinate with contractors and vendors on installation.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Space Planning",
                description: "Balance aesthetics with function, flow, and human factors in every layout.",
            },
            GrowthArea {
                skill: "Materials & Sourcing",
                description: "Build knowledge of sustainable and locally sourced options.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "landscape-architect",
        title: "Landscape Architect",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.65, strength: 0.75, passion: 0.9 },
        day_in_life: &[
            "Design outdoor spaces—parks, campuses, streetscapes, and private gardens.",
            "Select plants, hardscape materials, and irrigation systems.",
            "Address stormwater, ecology, and accessibility in designs.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Ecological Design",
                description: "Native plantings, habitat restoration, and green infrastructure are increasingly central.",
            },
            GrowthArea {
                skill: "GIS & Site Analysis",
                description: "Use spatial data to inform site selection and design decisions.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "ux-designer",
        title: "UX / Product Designer",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.85, strength: 0.8, passion: 0.9 },
        day_in_life: &[
            "Conduct user research and create wireframes and prototypes.",
            "Design flows and interfaces for digital products.",
            "Iterate based on feedback and usability testing.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "User Research",
                description: "Interviews, surveys, and usability tests uncover needs that drive design.",
            },
            GrowthArea {
                skill: "Design Systems",
                description: "Create reusable components and patterns for consistency at scale.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "digital-marketing-manager",
        title: "Digital Marketing Manager",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.75, strength: 0.7, passion: 0.8 },
        day_in_life: &[
            "Run campaigns across paid search, social, email, and content.",
            "Analyze performance and optimize spend and messaging.",
            "Align with sales and product on lead gen and brand goals.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Marketing Analytics",
                description: "Attribution, funnel analysis, and experimentation drive smarter decisions.",
            },
            GrowthArea {
                skill: "Copywriting & Creative",
                description: "Compelling messaging and creative concepts cut through noise.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "content-strategist",
        title: "Content Strategist",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.65, passion: 0.9 },
        day_in_life: &[
            "Define content plans and editorial calendars.",
            "Write or oversee blog posts, guides, and social content.",
            "Measure engagement and refine content for audience fit.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "SEO & Discoverability",
                description: "Keyword research and on-page optimization help content reach the right people.",
            },
            GrowthArea {
                skill: "Content Operations",
                description: "Workflow, CMS, and collaboration tools scale content production.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "brand-manager",
        title: "Brand Manager",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.65, passion: 0.9 },
        day_in_life: &[
            "Develop brand positioning, voice, and visual identity.",
            "Launch campaigns and track brand health metrics.",
            "Collaborate with creative, marketing, and product teams.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Brand Strategy",
                description: "Differentiation, audience understanding, and storytelling build lasting brands.",
            },
            GrowthArea {
                skill: "Cross-Functional Leadership",
                description: "Influence without authority across teams and agencies.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "healthcare-analyst",
        title: "Healthcare Data Analyst",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.8, strength: 0.8, passion: 0.85 },
        day_in_life: &[
            "Analyze patient outcomes, utilization, and cost data.",
            "Support quality improvement and population health initiatives.",
            "Report to clinical and administrative stakeholders.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Clinical Workflows",
                description: "Understanding how care is delivered improves analysis relevance.",
            },
            GrowthArea {
                skill: "Healthcare Regulations",
                description: "HIPAA, value-based care, and reporting requirements shape data use.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "instructional-designer",
        title: "Instructional Designer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.75, strength: 0.7, passion: 0.9 },
        day_in_life: &[
            "Design courses, training modules, and learning experiences.",
            "Apply learning theory and assess effectiveness.",
            "Work with subject matter experts and use authoring tools.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Learning Science",
                description: "Cognitive load, spaced repetition, and feedback improve retention.",
            },
            GrowthArea {
                skill: "Multimedia Production",
                description: "Video, simulations, and interactive elements enhance engagement.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "corporate-trainer",
        title: "Corporate Trainer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.65, strength: 0.7, passion: 0.9 },
        day_in_life: &[
            "Deliver in-person or virtual training sessions.",
            "Develop materials and assess learner progress.",
            "Partner with HR and managers on development needs.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Facilitation",
                description: "Engage diverse learners, handle questions, and adapt in real time.",
            },
            GrowthArea {
                skill: "Learning Technology",
                description: "LMS, virtual classrooms, and microlearning tools expand your reach.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "management-consultant",
        title: "Management Consultant",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.9, strength: 0.8, passion: 0.7 },
        day_in_life: &[
            "Analyze client problems and develop recommendations.",
            "Create slides, models, and presentations for executives.",
            "Work in teams on strategy, operations, or M&A projects.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Structured Problem Solving",
                description: "MECE frameworks and hypothesis-driven analysis clarify complex issues.",
            },
            GrowthArea {
                skill: "Client Communication",
                description: "Present clearly under pressure and build executive trust.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "paralegal",
        title: "Paralegal",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.6, strength: 0.8, passion: 0.65 },
        day_in_life: &[
            "Conduct legal research and draft documents.",
            "Organize case files and support attorneys.",
            "Assist with filings, deadlines, and client communications.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Legal Research",
                description: "Master databases and citation to find and synthesize relevant law.",
            },
            GrowthArea {
                skill: "Specialization",
                description: "Immigration, IP, corporate, or litigation—depth in one area adds value.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "project-manager",
        title: "Project Manager",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.75, strength: 0.8, passion: 0.65 },
        day_in_life: &[
            "Define scope, timelines, and resources for projects.",
            "Track progress, manage risks, and run status meetings.",
            "Remove blockers and keep stakeholders aligned.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Agile & Scrum",
                description: "Iterative delivery and cross-functional teams require adaptive project approaches.",
            },
            GrowthArea {
                skill: "Stakeholder Management",
                description: "Navigate competing priorities and build consensus across teams.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "hr-analyst",
        title: "HR / People Analyst",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.75, passion: 0.75 },
        day_in_life: &[
            "Analyze turnover, engagement, and workforce metrics.",
            "Support talent acquisition and retention strategies.",
            "Build dashboards for HR and leadership.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "People Analytics",
                description: "Combine HR data with business outcomes to drive talent decisions.",
            },
            GrowthArea {
                skill: "Organizational Psychology",
                description: "Understand motivation, culture, and team dynamics.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "game-developer",
        title: "Game Developer",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.85, strength: 0.9, passion: 0.95 },
        day_in_life: &[
            "Design and implement game mechanics and systems.",
            "Work with artists and designers on Unity/Unreal projects.",
            "Optimize performance and debug gameplay.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Game Design",
                description: "Balance fun, challenge, and progression in interactive experiences.",
            },
            GrowthArea {
                skill: "Graphics Programming",
                description: "Shaders, rendering, and real-time 3D bring worlds to life.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "journalist",
        title: "Journalist / Reporter",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.65, passion: 0.9 },
        day_in_life: &[
            "Research stories, conduct interviews, and verify facts.",
            "Write articles for print or digital publications.",
            "Build sources and follow beats.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Investigative Journalism",
                description: "Deep research and source development uncover important stories.",
            },
            GrowthArea {
                skill: "Multimedia Storytelling",
                description: "Video, podcast, and data viz expand your reach.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "supply-chain-analyst",
        title: "Supply Chain Analyst",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.8, passion: 0.55 },
        day_in_life: &[
            "Analyze inventory, demand, and logistics data.",
            "Optimize sourcing, warehousing, and distribution.",
            "Report on KPIs and support planning.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Demand Forecasting",
                description: "Statistical and ML models improve inventory and capacity planning.",
            },
            GrowthArea {
                skill: "Supplier Management",
                description: "Relationships, contracts, and risk mitigation protect the chain.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "cybersecurity-analyst",
        title: "Cybersecurity Analyst",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.9, strength: 0.85, passion: 0.7 },
        day_in_life: &[
            "Monitor systems for threats and vulnerabilities.",
            "Investigate incidents and implement security controls.",
            "Conduct risk assessments and compliance reviews.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Threat Intelligence",
                description: "Stay ahead of attackers with threat feeds and hunting techniques.",
            },
            GrowthArea {
                skill: "Security Architecture",
                description: "Design defense-in-depth and secure-by-default systems.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "biomedical-engineer",
        title: "Biomedical Engineer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.85, strength: 0.85, passion: 0.9 },
        day_in_life: &[
            "Design medical devices and diagnostic equipment.",
            "Conduct testing and validation for regulatory approval.",
            "Collaborate with clinicians and researchers.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Regulatory Affairs",
                description: "FDA and international pathways for medical devices.",
            },
            GrowthArea {
                skill: "Biomaterials",
                description: "Understanding tissue interaction and biocompatibility.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "social-media-manager",
        title: "Social Media Manager",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.65, strength: 0.6, passion: 0.9 },
        day_in_life: &[
            "Create and schedule content across platforms.",
            "Engage with communities and analyze performance.",
            "Align social strategy with brand and marketing goals.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Community Management",
                description: "Build loyal audiences through authentic engagement.",
            },
            GrowthArea {
                skill: "Paid Social",
                description: "Ads and boosting amplify reach with targeted audiences.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "technical-writer",
        title: "Technical Writer",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.65, strength: 0.7, passion: 0.7 },
        day_in_life: &[
            "Write documentation, guides, and API references.",
            "Work with engineers to capture and simplify complex topics.",
            "Maintain docs as products evolve.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Documentation Systems",
                description: "Static sites, versioning, and search improve doc usability.",
            },
            GrowthArea {
                skill: "Developer Experience",
                description: "Onboarding and self-serve reduce support burden.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "recruiter",
        title: "Technical Recruiter",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.6, strength: 0.7, passion: 0.8 },
        day_in_life: &[
            "Source and screen candidates for technical roles.",
            "Conduct interviews and coordinate hiring processes.",
            "Build relationships with hiring managers and candidates.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Sourcing Strategies",
                description: "Boolean search, LinkedIn, and networks find passive talent.",
            },
            GrowthArea {
                skill: "Candidate Experience",
                description: "Fast, clear, and respectful processes win top candidates.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "venture-capital-associate",
        title: "Venture Capital Associate",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.95, strength: 0.75, passion: 0.85 },
        day_in_life: &[
            "Source and evaluate startup investment opportunities.",
            "Conduct due diligence and market analysis.",
            "Support portfolio companies and fund operations.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Deal Sourcing",
                description: "Build networks and thesis to find the best opportunities.",
            },
            GrowthArea {
                skill: "Financial Modeling",
                description: "Valuation, cap tables, and returns analysis.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "product-marketing-manager",
        title: "Product Marketing Manager",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.85, strength: 0.7, passion: 0.9 },
        day_in_life: &[
            "Bridge product, engineering, and marketing to define go-to-market strategy.",
            "Create positioning, messaging, and launch plans for new products.",
            "Analyze competitors and market trends to inform product roadmap.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Technical Acumen",
                description: "Understanding how products work helps you translate features into customer value and differentiate in market.",
            },
            GrowthArea {
                skill: "GTM Strategy",
                description: "Channel mix, pricing, and launch timing are core to successful product launches.",
            },
        ],
        polymath_meta: Some(PolymathMeta {
            intersection: "Tech + Marketing",
            why_fit: &[
                "You speak both product and customer; few do.",
                "Technical depth + messaging = differentiation.",
            ],
            proof_task: "Write positioning and 3 key messages for one product in 2 hours.",
            two_week_experiment: "Run one small launch (feature, campaign) end-to-end and measure impact.",
        }),
    },
    CareerNode {
        id: "growth-hacker",
        title: "Growth Hacker / Growth Lead",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.95, strength: 0.75, passion: 0.9 },
        day_in_life: &[
            "Run experiments across acquisition, activation, retention, and referral.",
            "Combine marketing, product, and analytics to drive measurable growth.",
            "Build funnels, automate campaigns, and iterate with data.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Experiment Design",
                description: "Rigorous A/B testing and statistical confidence separate real wins from noise.",
            },
            GrowthArea {
                skill: "Full-Stack Growth",
                description: "Basic coding, SQL, and product sense let you ship experiments without waiting on engineering.",
            },
        ],
        polymath_meta: Some(PolymathMeta {
            intersection: "Marketing + Tech + Product",
            why_fit: &[
                "You combine creativity with data—both matter for growth.",
                "Polymath skill stack is exactly what growth needs.",
            ],
            proof_task: "Set up one A/B test (even in a spreadsheet) for a real or hypothetical funnel in 2 hours.",
            two_week_experiment: "Run 3 small growth experiments and document learnings.",
        }),
    },
    CareerNode {
        id: "startup-operator",
        title: "Startup Operator / Entrepreneur in Residence",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.95, strength: 0.7, passion: 0.95 },
        day_in_life: &[
            "Wear many hats: strategy, fundraising, ops, and go-to-market at early-stage companies.",
            "Build processes and teams from zero to scale.",
            "Evaluate deals and support portfolio companies from a VC or accelerator.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Fundraising",
                description: "Pitch decks, investor relations, and cap table management are essential for founders and operators.",
            },
            GrowthArea {
                skill: "Operator Mindset",
                description: "Move fast, prioritize ruthlessly, and learn from both wins and failures.",
            },
        ],
        polymath_meta: Some(PolymathMeta {
            intersection: "Finance + Entrepreneurship",
            why_fit: &[
                "You wear many hats; operators and EIRs do too.",
                "Breadth + execution speed = fit.",
            ],
            proof_task: "Create a one-page pitch or investment memo for one company in 2 hours.",
            two_week_experiment: "Shadow one portfolio company or founder and document 5 operational insights.",
        }),
    },
    CareerNode {
        id: "science-communicator",
        title: "Science Writer / Science Communicator",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.85, strength: 0.65, passion: 0.95 },
        day_in_life: &[
            "Turn complex research into stories, articles, or videos for broad audiences.",
            "Collaborate with scientists, educators, and media outlets.",
            "Bridge technical depth with narrative clarity.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Narrative Structure",
                description: "Learn how to translate jargon into engaging narratives without losing accuracy.",
            },
            GrowthArea {
                skill: "Multimedia",
                description: "Video, podcast, and interactive formats expand your reach.",
            },
        ],
        polymath_meta: Some(PolymathMeta {
            intersection: "Research + Creative",
            why_fit: &[
                "You already know the science; storytelling lets you share it.",
                "Cross-domain thinking is the core skill.",
            ],
            proof_task: "Rewrite one abstract or paper section for a 12-year-old in under 2 hours.",
            two_week_experiment: "Publish 3 short explainers on a topic you know, track engagement.",
        }),
    },
    CareerNode {
        id: "edtech-product",
        title: "EdTech Product Manager",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.9, strength: 0.7, passion: 0.95 },
        day_in_life: &[
            "Define products that improve learning outcomes (apps, platforms, tools).",
            "Work with educators, engineers, and learners to shape roadmaps.",
            "Measure impact through engagement and achievement metrics.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Learning Science",
                description: "Understand how people learn to design effective products.",
            },
            GrowthArea {
                skill: "Product Discovery",
                description: "Interviews and experiments with teachers and students.",
            },
        ],
        polymath_meta: Some(PolymathMeta {
            intersection: "Education + Tech + Product",
            why_fit: &[
                "You care about learning; tech scales impact.",
                "Teaching background + product sense = rare combo.",
            ],
            proof_task: "Interview 3 educators about one pain point and draft a 1-pager solution.",
            two_week_experiment: "Build a tiny learning tool (Notion, spreadsheet, or simple app) and test with 5 users.",
        }),
    },
    CareerNode {
        id: "design-strategist",
        title: "Design Strategist / Service Designer",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.85, strength: 0.7, passion: 0.9 },
        day_in_life: &[
            "Combine design, research, and business to shape strategy and services.",
            "Run workshops, map journeys, and prototype new offerings.",
            "Bridge C-suite and frontline teams.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Facilitation",
                description: "Lead cross-functional sessions that surface insights and alignment.",
            },
            GrowthArea {
                skill: "Business Acumen",
                description: "Connect design decisions to revenue, cost, and risk.",
            },
        ],
        polymath_meta: Some(PolymathMeta {
            intersection: "Design + Business + Research",
            why_fit: &[
                "Design gives you tools; strategy gives you influence.",
                "Pattern recognition across domains is your edge.",
            ],
            proof_task: "Map the current experience of one real service (e.g. signing up, onboarding) in 2 hours.",
            two_week_experiment: "Run one strategy workshop with a real team and document outcomes.",
        }),
    },
    CareerNode {
        id: "health-tech-product",
        title: "Health Tech Product Manager",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.9, strength: 0.75, passion: 0.9 },
        day_in_life: &[
            "Ship products for patients, clinicians, or healthcare systems.",
            "Navigate regulatory, clinical, and UX constraints.",
            "Partner with physicians and engineers to prioritize features.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Clinical Workflows",
                description: "Understand how care is delivered to design useful tools.",
            },
            GrowthArea {
                skill: "Compliance",
                description: "HIPAA, FDA pathways, and privacy shape what you can ship.",
            },
        ],
        polymath_meta: Some(PolymathMeta {
            intersection: "Healthcare + Tech + Product",
            why_fit: &[
                "Healthcare needs people who get both clinical reality and software.",
                "Impact is immediate and measurable.",
            ],
            proof_task: "Shadow one clinician for 2 hours and document 3 workflow pain points.",
            two_week_experiment: "Design a simple patient-facing flow (wireframes or prototype) and get feedback from 2 clinicians.",
        }),
    },
    CareerNode {
        id: "sustainability-analyst",
        title: "Sustainability / ESG Analyst",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.85, strength: 0.75, passion: 0.95 },
        day_in_life: &[
            "Model carbon, ESG metrics, or supply-chain impacts.",
            "Support reporting, strategy, and investor relations.",
            "Bridge science, policy, and business.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Life Cycle Assessment",
                description: "Quantify environmental impact across product lifecycles.",
            },
            GrowthArea {
                skill: "Reporting Frameworks",
                description: "GRI, SASB, TCFD—understand standards and disclosure.",
            },
        ],
        polymath_meta: Some(PolymathMeta {
            intersection: "Environmental + Finance + Policy",
            why_fit: &[
                "You care about impact; business language gets it heard.",
                "Data + narrative = change.",
            ],
            proof_task: "Calculate the carbon footprint of one product or process in 2 hours.",
            two_week_experiment: "Draft an ESG-style report for one small organization or project.",
        }),
    },
    CareerNode {
        id: "innovation-consultant",
        title: "Innovation Consultant / Futures Designer",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.95, strength: 0.7, passion: 0.95 },
        day_in_life: &[
            "Run foresight, design sprints, or innovation programs for clients.",
            "Synthesize trends, research, and stakeholder input into strategies.",
            "Facilitate teams through ambiguity to clarity.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Futures Methods",
                description: "Scenarios, backcasting, and trend mapping.",
            },
            GrowthArea {
                skill: "Stakeholder Alignment",
                description: "Build shared vision across silos.",
            },
        ],
        polymath_meta: Some(PolymathMeta {
            intersection: "Design + Research + Business",
            why_fit: &[
                "Polymaths excel in ambiguity; innovation work is all ambiguity.",
                "Your breadth is the product.",
            ],
            proof_task: "Create a 2x2 scenario matrix for one industry or domain in 2 hours.",
            two_week_experiment: "Run a mini futures workshop with 3–5 people and document outputs.",
        }),
    },
    CareerNode {
        id: "urban-planner",
        title: "Urban Planner",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.65, passion: 0.9 },
        day_in_life: &[
            "Develop plans for land use, transportation, and zoning.",
            "Engage communities and analyze policy impacts.",
            "Prepare reports and presentations for stakeholders.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "GIS & Spatial Analysis",
                description: "Maps and data inform equitable and sustainable plans.",
            },
            GrowthArea {
                skill: "Public Engagement",
                description: "Inclusive processes build support for change.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "pharmaceutical-scientist",
        title: "Pharmaceutical Scientist",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.9, strength: 0.85, passion: 0.8 },
        day_in_life: &[
            "Conduct research on drug discovery and development.",
            "Run experiments and analyze results.",
            "Document and comply with regulatory requirements.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Clinical Trials",
                description: "Design and manage studies from Phase I to approval.",
            },
            GrowthArea {
                skill: "Regulatory Science",
                description: "Navigate FDA and global submission pathways.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "event-planner",
        title: "Event Planner / Coordinator",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.6, strength: 0.7, passion: 0.9 },
        day_in_life: &[
            "Plan and execute conferences, weddings, or corporate events.",
            "Coordinate vendors, venues, and logistics.",
            "Manage budgets and timelines.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Vendor Management",
                description: "Negotiate, contract, and manage relationships.",
            },
            GrowthArea {
                skill: "Event Technology",
                description: "Registration, apps, and virtual hybrid tools.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "database-administrator",
        title: "Database Administrator (DBA)",
        source: CareerSource::Database,
        dimensions: Dimensions { growth: 0.7, strength: 0.9, passion: 0.55 },
        day_in_life: &[
            "Manage, tune, and secure database systems.",
            "Plan backups, migrations, and capacity.",
            "Support developers and troubleshoot issues.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Performance Tuning",
                description: "Query optimization, indexing, and scaling strategies.",
            },
            GrowthArea {
                skill: "Data Governance",
                description: "Security, privacy, and compliance in data systems.",
            },
        ],
        polymath_meta: None,
    },
    CareerNode {
        id: "security-engineer",
        title: "Security Engineer",
        source: CareerSource::Ai,
        dimensions: Dimensions { growth: 0.85, strength: 0.9, passion: 0.75 },
        day_in_life: &[
            "Design and implement security controls.",
            "Conduct penetration testing and code reviews.",
            "Respond to incidents and improve defenses.",
        ],
        growth_areas: &[
            GrowthArea {
                skill: "Application Security",
                description: "SAST, DAST, and secure SDLC practices.",
            },
            GrowthArea {
                skill: "Cloud Security",
                description: "Identity, encryption, and compliance in AWS/GCP/Azure.",
            },
        ],
        polymath_meta: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = CAREER_PATHS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CAREER_PATHS.len());
        assert_eq!(CAREER_PATHS.len(), 73);
    }

    #[test]
    fn test_dimensions_within_unit_range() {
        for career in CAREER_PATHS {
            for dim in [Dimension::Growth, Dimension::Strength, Dimension::Passion] {
                let v = career.dimensions.get(dim);
                assert!((0.0..=1.0).contains(&v), "{} {dim:?} = {v}", career.id);
            }
        }
    }

    #[test]
    fn test_slug_collapses_punctuation() {
        assert_eq!(slug("Database Administrator (DBA)"), "database-administrator-dba");
        assert_eq!(slug("Software Developer / Engineer"), "software-developer-engineer");
        assert_eq!(slug("  --AI--  "), "ai");
    }

    #[test]
    fn test_career_by_id_matches_id_or_title_slug() {
        assert_eq!(career_by_id("growth-hacker").map(|c| c.id), Some("growth-hacker"));
        assert_eq!(
            career_by_id("software-developer-engineer").map(|c| c.id),
            Some("software-developer")
        );
        assert!(career_by_id("astronaut").is_none());
    }

    #[test]
    fn test_explore_defaults_to_curated_set() {
        let ids: Vec<&str> = explore_careers(&[]).iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), DEFAULT_EXPLORE_IDS.len());
        assert_eq!(ids[0], "product-owner");
    }

    #[test]
    fn test_explore_keeps_catalog_order_and_drops_unknown() {
        let ids: Vec<&str> = explore_careers(&["security-engineer", "nope", "product-owner"])
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["product-owner", "security-engineer"]);
    }

    #[test]
    fn test_polymath_meta_skipped_when_absent() {
        let json = serde_json::to_value(&CAREER_PATHS[0]).unwrap();
        assert!(json.get("polymathMeta").is_none());
        assert!(json.get("dayInLife").is_some());
        assert_eq!(json["source"], "database");
    }

    #[test]
    fn test_polymath_meta_serializes_camel_case() {
        let career = CAREER_PATHS
            .iter()
            .find(|c| c.polymath_meta.is_some())
            .expect("catalog has polymath entries");
        let json = serde_json::to_value(career).unwrap();
        assert!(json["polymathMeta"]["whyFit"].is_array());
        assert!(json["polymathMeta"]["twoWeekExperiment"].is_string());
    }
}
