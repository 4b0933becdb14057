//! Fixed content template bodies
//!
//! Twelve templates, one per (category, mode) pair. The exhaustive match
//! means adding a category or mode without a template is a compile error.

use crate::content::Mode;
use crate::topic::SdgCategory;

/// Build the HTML fragment for a classified topic
///
/// `topic` is the already title-cased display form and is interpolated
/// verbatim; everything else is fixed text.
pub fn body(category: SdgCategory, mode: Mode, topic: &str) -> String {
    let heading = format!(
        "<h3>{} {} - {} ({})</h3>",
        mode.prefix(),
        category.label(),
        topic,
        mode.description()
    );

    let rest = match (category, mode) {
        (SdgCategory::Education, Mode::Basic) => format!(
            "<p><strong>What is {topic}?</strong></p>\
             <p>{topic} is a fundamental aspect of quality education that empowers individuals \
             and communities. Quality education ensures inclusive and equitable learning \
             opportunities for all, promoting lifelong learning and sustainable development.</p>\
             <p><strong>Why is it important?</strong></p>\
             <p>Education is the foundation for sustainable development. It enables people to \
             make informed decisions, develop critical thinking skills, and contribute \
             meaningfully to society.</p>\
             <ul>\
             <li>Support educational initiatives in your community</li>\
             <li>Advocate for equal access to quality education</li>\
             <li>Engage in lifelong learning opportunities</li>\
             <li>Share knowledge and mentor others</li>\
             </ul>"
        ),
        (SdgCategory::Education, Mode::Deep) => format!(
            "<p><strong>Advanced Understanding of {topic}:</strong></p>\
             <p>{topic} represents a complex intersection of pedagogical theory, cognitive \
             science, and social development. Quality education systems integrate multiple \
             learning modalities, including constructivist approaches, experiential learning \
             frameworks, and technology-enhanced instruction.</p>\
             <p><strong>Global Impact Metrics:</strong></p>\
             <ul>\
             <li>Literacy rates and numeracy proficiency indicators</li>\
             <li>Educational attainment levels across demographic groups</li>\
             <li>Teacher-to-student ratios and classroom resource allocation</li>\
             <li>Technology integration and digital literacy outcomes</li>\
             </ul>"
        ),
        (SdgCategory::Education, Mode::Action) => format!(
            "<p><strong>Immediate Action Steps for {topic}:</strong></p>\
             <p><strong>This Week:</strong></p>\
             <ul>\
             <li>Volunteer as a tutor or mentor in local schools</li>\
             <li>Donate educational materials to underserved communities</li>\
             <li>Advocate for increased education funding at local government meetings</li>\
             </ul>\
             <p><strong>Long-term Commitment:</strong></p>\
             <ul>\
             <li>Join education policy advocacy groups</li>\
             <li>Support scholarship programs for disadvantaged students</li>\
             <li>Invest in educational technology for local schools</li>\
             </ul>"
        ),
        (SdgCategory::Water, Mode::Basic) => format!(
            "<p><strong>What is {topic}?</strong></p>\
             <p>{topic} directly impacts water quality and availability. Clean water and \
             sanitation are essential for human health, environmental sustainability, and \
             economic development. Water scarcity affects more than 40% of the global \
             population.</p>\
             <p><strong>Why is it important?</strong></p>\
             <p>Access to clean water and sanitation is a basic human right. It prevents \
             waterborne diseases, supports ecosystem health, and enables sustainable \
             agriculture and industry.</p>\
             <ul>\
             <li>Conserve water in daily activities</li>\
             <li>Reduce water pollution by proper waste disposal</li>\
             <li>Support water conservation projects</li>\
             <li>Educate others about water importance</li>\
             </ul>"
        ),
        (SdgCategory::Water, Mode::Deep) => format!(
            "<p><strong>Scientific Analysis of {topic}:</strong></p>\
             <p>{topic} involves complex hydrological, chemical, and biological processes. \
             Water quality assessment requires understanding of pH levels, dissolved oxygen \
             concentrations, microbial contamination indicators, and pollutant thresholds \
             established by WHO and EPA standards.</p>\
             <p><strong>Environmental Impact Assessment:</strong></p>\
             <ul>\
             <li>Aquatic ecosystem health indicators and biodiversity metrics</li>\
             <li>Water cycle disruption patterns and climate change impacts</li>\
             <li>Contaminant transport modeling and risk assessment protocols</li>\
             <li>Sustainable water resource management frameworks</li>\
             </ul>"
        ),
        (SdgCategory::Water, Mode::Action) => format!(
            "<p><strong>Practical Water Conservation Actions for {topic}:</strong></p>\
             <p><strong>Home Water Management:</strong></p>\
             <ul>\
             <li>Install low-flow showerheads and faucet aerators</li>\
             <li>Fix leaks immediately and monitor water usage</li>\
             <li>Collect rainwater for garden irrigation</li>\
             </ul>\
             <p><strong>Community Water Protection:</strong></p>\
             <ul>\
             <li>Participate in local water quality monitoring programs</li>\
             <li>Support watershed protection initiatives</li>\
             <li>Organize community clean-up events</li>\
             </ul>"
        ),
        (SdgCategory::Climate, Mode::Basic) => format!(
            "<p><strong>What is {topic}?</strong></p>\
             <p>{topic} is a critical component of climate action and environmental \
             sustainability. Climate change affects every country and requires urgent action \
             to limit global temperature rise and adapt to its impacts.</p>\
             <p><strong>Why is it important?</strong></p>\
             <p>Climate change threatens food security, water availability, and human health. \
             Taking climate action helps protect ecosystems, reduce disaster risks, and create \
             sustainable economic opportunities.</p>\
             <ul>\
             <li>Reduce your carbon footprint</li>\
             <li>Use renewable energy sources</li>\
             <li>Support climate-friendly policies</li>\
             <li>Plant trees and support reforestation</li>\
             </ul>"
        ),
        (SdgCategory::Climate, Mode::Deep) => format!(
            "<p><strong>Climate Science Analysis of {topic}:</strong></p>\
             <p>{topic} involves complex atmospheric physics, carbon cycle dynamics, and \
             climate modeling. Understanding requires knowledge of radiative forcing, \
             greenhouse gas concentrations (CO2, CH4, N2O), and climate sensitivity \
             parameters. Current atmospheric CO2 levels exceed 420 ppm, well above \
             pre-industrial levels of 280 ppm.</p>\
             <p><strong>Climate Impact Modeling:</strong></p>\
             <ul>\
             <li>Temperature rise projections and regional climate variability</li>\
             <li>Sea level rise scenarios and coastal vulnerability assessments</li>\
             <li>Extreme weather event frequency and intensity modeling</li>\
             <li>Ecosystem response patterns and biodiversity impact studies</li>\
             </ul>"
        ),
        (SdgCategory::Climate, Mode::Action) => format!(
            "<p><strong>Immediate Climate Action Steps for {topic}:</strong></p>\
             <p><strong>Personal Carbon Reduction:</strong></p>\
             <ul>\
             <li>Calculate and track your carbon footprint monthly</li>\
             <li>Switch to renewable energy for home and transportation</li>\
             <li>Minimize air travel and choose sustainable transport</li>\
             </ul>\
             <p><strong>Community Climate Initiatives:</strong></p>\
             <ul>\
             <li>Join local climate action groups</li>\
             <li>Organize tree planting and urban greening projects</li>\
             <li>Support climate education programs in schools</li>\
             </ul>"
        ),
        (SdgCategory::General, Mode::Basic) => format!(
            "<p><strong>What is {topic}?</strong></p>\
             <p>{topic} is an important aspect of sustainable development that connects to \
             multiple Sustainable Development Goals. Understanding sustainability helps us \
             create a better future for all.</p>\
             <p><strong>Connection to SDGs:</strong></p>\
             <ul>\
             <li><strong>SDG 4 (Quality Education):</strong> Learning about {topic} promotes \
             environmental literacy and critical thinking</li>\
             <li><strong>SDG 6 (Clean Water):</strong> Many sustainability topics relate to \
             water conservation and protection</li>\
             <li><strong>SDG 13 (Climate Action):</strong> Most sustainability efforts \
             contribute to climate change mitigation</li>\
             </ul>"
        ),
        (SdgCategory::General, Mode::Deep) => format!(
            "<p><strong>Comprehensive Analysis of {topic}:</strong></p>\
             <p>{topic} represents a complex intersection of environmental science, social \
             systems, and economic frameworks. Understanding requires analysis of ecological \
             footprints, life cycle assessments, and systems thinking approaches to \
             sustainable development.</p>\
             <p><strong>Research Methodologies:</strong></p>\
             <ul>\
             <li>Environmental impact assessment protocols</li>\
             <li>Sustainability metrics and indicator frameworks</li>\
             <li>Stakeholder engagement and participatory research methods</li>\
             <li>Scenario planning and future studies approaches</li>\
             </ul>"
        ),
        (SdgCategory::General, Mode::Action) => format!(
            "<p><strong>Actionable Sustainability Steps for {topic}:</strong></p>\
             <p><strong>Individual Actions:</strong></p>\
             <ul>\
             <li>Audit your lifestyle for sustainability opportunities</li>\
             <li>Adopt circular economy principles in daily consumption</li>\
             <li>Support sustainable businesses and ethical products</li>\
             </ul>\
             <p><strong>Community Engagement:</strong></p>\
             <ul>\
             <li>Join sustainability-focused community groups</li>\
             <li>Organize local environmental initiatives</li>\
             <li>Promote sustainable practices in your workplace</li>\
             </ul>"
        ),
    };

    format!("{heading}{rest}")
}
