//! Hard-coded default content.
//!
//! [`default_snapshot`] is the state shown before any load completes, the
//! fallback used when sanitizing stored data, and the reset target until a
//! bootstrap document replaces it. Each call builds a fresh, independent
//! value.

use crate::models::{
    Certification, ContactInfo, Experience, HeroContent, Highlight, HighlightValueType, IconKey,
    PortfolioContent, PortfolioSnapshot, Project, Skill, SoftSkill, TechWatchContent,
    TechWatchRoadmapStep, TechWatchSource, TechWatchTopic,
};

/// The complete default snapshot.
pub fn default_snapshot() -> PortfolioSnapshot {
    PortfolioSnapshot {
        projects: default_projects(),
        skills: default_skills(),
        content: default_content(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    icon: IconKey,
    technologies: &[&str],
    achievements: &[&str],
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon,
        technologies: strings(technologies),
        achievements: strings(achievements),
    }
}

fn skill(id: &str, name: &str, category: &str, icon: IconKey) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        icon,
    }
}

pub fn default_projects() -> Vec<Project> {
    vec![
        project(
            "glpi-ocs",
            "GLPI & OCS Inventory",
            "Mise en place d'une solution complète de gestion de parc informatique avec \
             inventaire automatisé et suivi des tickets.",
            IconKey::Database,
            &["GLPI", "OCS Inventory", "MySQL", "PHP", "Apache"],
            &[
                "Inventaire automatique de 100+ postes",
                "Gestion centralisée des tickets",
                "Rapports et tableaux de bord personnalisés",
            ],
        ),
        project(
            "vlans-cisco",
            "VLANs Cisco",
            "Configuration et segmentation réseau avec VLANs sur équipements Cisco pour \
             améliorer la sécurité et les performances.",
            IconKey::Network,
            &["Cisco IOS", "VLANs", "Trunking", "STP", "Routage inter-VLAN"],
            &[
                "Segmentation réseau en 5 VLANs métier",
                "Configuration de trunking 802.1Q",
                "Optimisation du routage inter-VLAN",
            ],
        ),
        project(
            "proxmox-ad",
            "Proxmox & Active Directory",
            "Déploiement d'une infrastructure virtualisée avec Proxmox et intégration d'un \
             domaine Active Directory DS.",
            IconKey::Server,
            &["Proxmox VE", "Windows Server", "Active Directory", "GPO", "DNS"],
            &[
                "Cluster Proxmox haute disponibilité",
                "Domaine AD avec 3 contrôleurs",
                "Stratégies de groupe (GPO) avancées",
            ],
        ),
        project(
            "serveur-3cx",
            "Serveur 3CX",
            "Installation et configuration d'une solution de téléphonie IP 3CX pour les \
             communications d'entreprise.",
            IconKey::Phone,
            &["3CX", "SIP", "VoIP", "Asterisk", "QoS"],
            &[
                "Configuration de 50+ extensions",
                "Intégration avec le réseau VoIP",
                "Mise en place de files d'attente et IVR",
            ],
        ),
        project(
            "infrastructure-securite",
            "Infrastructure de Sécurité",
            "Déploiement de solutions de sécurité réseau incluant pare-feu, VPN et surveillance.",
            IconKey::Shield,
            &["pfSense", "OpenVPN", "IDS/IPS", "Firewall", "Logs"],
            &[
                "Pare-feu pfSense multi-WAN",
                "VPN site-à-site et client",
                "Monitoring avec Nagios",
            ],
        ),
    ]
}

pub fn default_skills() -> Vec<Skill> {
    vec![
        skill("windows-server", "Windows Server", "Systèmes", IconKey::Monitor),
        skill("linux", "Linux (Debian/Ubuntu)", "Systèmes", IconKey::Server),
        skill("active-directory", "Active Directory", "Systèmes", IconKey::Database),
        skill("virtualisation-proxmox", "Virtualisation (Proxmox)", "Systèmes", IconKey::Boxes),
        skill("cisco-ios", "Cisco IOS", "Réseau", IconKey::Network),
        skill("vlans-routage", "VLANs & Routage", "Réseau", IconKey::Wifi),
        skill("vpn-securite", "VPN & Sécurité réseau", "Réseau", IconKey::Lock),
        skill("tcp-ip", "TCP/IP", "Réseau", IconKey::Globe),
        skill("glpi", "GLPI", "Services", IconKey::FileText),
        skill("dns-dhcp", "DNS & DHCP", "Services", IconKey::Server),
        skill("voip-3cx", "3CX / VoIP", "Services", IconKey::Phone),
        skill("apache-nginx", "Apache / Nginx", "Services", IconKey::Cloud),
        skill("pfsense", "pfSense", "Sécurité", IconKey::Shield),
        skill("backup-pra", "Backup & PRA", "Sécurité", IconKey::HardDrive),
        skill("monitoring-nagios", "Monitoring (Nagios)", "Sécurité", IconKey::Activity),
    ]
}

pub fn default_content() -> PortfolioContent {
    PortfolioContent {
        hero: default_hero(),
        highlights: default_highlights(),
        about: strings(&[
            "Fort d'une formation BTS SISR, je me spécialise dans la conception, le déploiement \
             et la maintenance d'infrastructures IT complexes. Mon expertise couvre la \
             virtualisation (Proxmox), l'administration réseau (VLANs, Cisco), et les services \
             d'entreprise (Active Directory, 3CX).",
            "Rigoureux et méthodique, j'applique les meilleures pratiques pour garantir la \
             sécurité, la performance et la disponibilité des systèmes dont j'ai la charge. Mon \
             approche orientée solution me permet de répondre efficacement aux besoins \
             techniques des organisations.",
        ]),
        experiences: default_experiences(),
        soft_skills: default_soft_skills(),
        certifications: default_certifications(),
        tech_watch: default_tech_watch(),
        contact: default_contact(),
    }
}

pub fn default_hero() -> HeroContent {
    HeroContent {
        badge: "Technicien SISR".to_string(),
        greeting: "Bonjour, je suis".to_string(),
        highlight: "Greg".to_string(),
        description: "Passionné par l'infrastructure réseau, la virtualisation et \
                      l'administration système. Je conçois et maintiens des solutions techniques \
                      robustes pour optimiser les systèmes d'information."
            .to_string(),
        primary_cta_label: "Voir mes projets".to_string(),
        primary_cta_href: "/projets".to_string(),
        secondary_cta_label: "Télécharger CV".to_string(),
        secondary_cta_href: "/cv-greg.pdf".to_string(),
        secondary_cta_download: true,
        tertiary_cta_label: "LinkedIn".to_string(),
        tertiary_cta_href: "https://linkedin.com".to_string(),
        tertiary_cta_external: true,
    }
}

fn default_highlights() -> Vec<Highlight> {
    let highlight = |id: &str, label: &str, value_type, custom_value: &str| Highlight {
        id: id.to_string(),
        label: label.to_string(),
        value_type,
        custom_value: custom_value.to_string(),
    };
    vec![
        highlight("projects-count", "Projets réalisés", HighlightValueType::Projects, ""),
        highlight("skills-count", "Technologies maîtrisées", HighlightValueType::Skills, ""),
        highlight("commitment", "Engagement professionnel", HighlightValueType::Custom, "100%"),
    ]
}

fn default_experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "experience-sf2i".to_string(),
            title: "Stage - SF2i".to_string(),
            organization: "SF2i".to_string(),
            period: "2023".to_string(),
            description: "Immersion au sein de l'équipe d'infogérance pour assurer la \
                          disponibilité des infrastructures clients. Participation au maintien en \
                          conditions opérationnelles des serveurs, à la mise en place de solutions \
                          de sauvegarde et à la supervision de réseaux multi-sites. Contribution \
                          aux interventions sur site pour le déploiement de matériels et la \
                          résolution d'incidents utilisateurs."
                .to_string(),
        },
        Experience {
            id: "experience-noumea".to_string(),
            title: "Alternance - Mairie de Nouméa".to_string(),
            organization: "Mairie de Nouméa".to_string(),
            period: "2023 - Aujourd'hui".to_string(),
            description: "Membre de l'équipe numérique de la collectivité avec un rôle \
                          polyvalent : support utilisateur de niveau 2, gestion du parc et des \
                          comptes Active Directory, suivi des projets de modernisation du SI et \
                          automatisation de tâches récurrentes. Mise en œuvre de bonnes pratiques \
                          de sécurité, rédaction de procédures et coordination avec les \
                          prestataires externes pour garantir la continuité des services \
                          municipaux."
                .to_string(),
        },
    ]
}

fn default_soft_skills() -> Vec<SoftSkill> {
    let soft_skill = |id: &str, icon: &str, title: &str, description: &str| SoftSkill {
        id: id.to_string(),
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    };
    vec![
        soft_skill(
            "softskill-rigueur",
            "🎯",
            "Rigueur",
            "Méthodologie structurée et documentation précise",
        ),
        soft_skill(
            "softskill-analyse",
            "🔍",
            "Analyse",
            "Diagnostic rapide et résolution efficace des problèmes",
        ),
        soft_skill(
            "softskill-collaboration",
            "🤝",
            "Collaboration",
            "Esprit d'équipe et communication claire",
        ),
    ]
}

fn default_certifications() -> Vec<Certification> {
    vec![
        Certification {
            id: "cert-ccna".to_string(),
            title: "CCNA: Switching, Routing & Wireless Essentials".to_string(),
            organization: "Cisco Networking Academy".to_string(),
            date: "2023".to_string(),
            summary: "Validation des bases avancées en administration de réseaux, configuration \
                      d'équipements Cisco et dépannage d'infrastructures d'entreprise."
                .to_string(),
            highlights: strings(&[
                "Mise en place complète d'une infrastructure LAN/WAN avec VLANs et routage \
                 inter-VLAN.",
                "Configuration des protocoles OSPF et RSTP pour garantir la résilience du réseau.",
                "Dépannage des déploiements sans-fil et sécurisation des accès.",
            ]),
            skills: strings(&["Routage", "Switching", "Sécurité réseau", "Cisco IOS"]),
        },
        Certification {
            id: "cert-azure".to_string(),
            title: "Azure Fundamentals (AZ-900)".to_string(),
            organization: "Microsoft".to_string(),
            date: "2022".to_string(),
            summary: "Compréhension des principes du cloud Microsoft Azure, de la sécurité et de \
                      la tarification afin d'accompagner les migrations vers les services \
                      managés."
                .to_string(),
            highlights: strings(&[
                "Cartographie des services IaaS/PaaS/SaaS adaptés aux besoins d'une collectivité.",
                "Évaluation des modèles de gouvernance et de gestion des identités Azure AD.",
                "Analyse budgétaire et mise en place d'alertes de consommation.",
            ]),
            skills: strings(&["Cloud", "Azure", "Sécurité", "FinOps"]),
        },
        Certification {
            id: "cert-itil".to_string(),
            title: "ITIL® 4 Foundation".to_string(),
            organization: "AXELOS".to_string(),
            date: "2021".to_string(),
            summary: "Acquisition des bonnes pratiques de gestion des services IT pour améliorer \
                      le support aux utilisateurs et la continuité d'activité."
                .to_string(),
            highlights: strings(&[
                "Formalisation d'un catalogue de services et d'indicateurs de suivi.",
                "Optimisation du processus de gestion des incidents et des demandes.",
                "Animation d'ateliers d'amélioration continue avec les équipes support.",
            ]),
            skills: strings(&[
                "ITSM",
                "Gestion des services",
                "Support utilisateur",
                "Amélioration continue",
            ]),
        },
    ]
}

fn default_tech_watch() -> TechWatchContent {
    let topic = |id: &str, title: &str, description: &str, actions: &[&str]| TechWatchTopic {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        actions: strings(actions),
    };
    let source = |id: &str, label: &str, items: &[&str]| TechWatchSource {
        id: id.to_string(),
        label: label.to_string(),
        items: strings(items),
    };
    let step = |id: &str, period: &str, goals: &[&str]| TechWatchRoadmapStep {
        id: id.to_string(),
        period: period.to_string(),
        goals: strings(goals),
    };

    TechWatchContent {
        badge: "Veille technologique".to_string(),
        title: "Anticiper les évolutions IT".to_string(),
        description: "Une démarche continue pour rester à jour sur les technologies \
                      essentielles à mes missions : infrastructure, sécurité et support. Cette \
                      veille guide mes choix d'outillage et mes propositions d'améliorations au \
                      sein des organisations que j'accompagne."
            .to_string(),
        focus_topics: vec![
            topic(
                "focus-infra",
                "Infrastructure & Cloud",
                "Surveillance continue des évolutions autour de Proxmox, VMware et des solutions \
                 de sauvegarde hybrides. Analyse des nouvelles offres IaaS locales et des impacts \
                 budgétaires pour des structures publiques.",
                &[
                    "Tests réguliers des versions beta de Proxmox VE pour anticiper les migrations.",
                    "Veille sur la redondance des sauvegardes et sur les solutions de PRA \
                     accessibles.",
                ],
            ),
            topic(
                "focus-securite",
                "Sécurité Opérationnelle",
                "Suivi des publications CERT-FR, bulletins Microsoft et best practices ANSSI pour \
                 renforcer les postes et serveurs. Mise à jour des procédures de durcissement et \
                 de gestion des incidents.",
                &[
                    "Mise en place d'alertes RSS et newsletters dédiées à la cybersécurité.",
                    "Ateliers internes pour sensibiliser les équipes sur les nouvelles campagnes \
                     de phishing.",
                ],
            ),
            topic(
                "focus-support",
                "Collaboration & Support",
                "Exploration des outils d'assistance à distance, de ticketing et d'automatisation \
                 (GLPI, ITSM, scripts PowerShell) pour améliorer la qualité de service auprès des \
                 utilisateurs.",
                &[
                    "Comparaison des solutions d'inventaire réseau pour optimiser la gestion de \
                     parc.",
                    "Expérimentation d'automatisations PowerShell pour accélérer l'onboarding.",
                ],
            ),
        ],
        sources: vec![
            source(
                "sources-blogs",
                "Blogs & Newsletters",
                &[
                    "Blog Proxmox, VMware Tech Journal",
                    "CERT-FR, Zataz, ANSSI",
                    "3CX Updates, Microsoft Learn",
                ],
            ),
            source(
                "sources-communautes",
                "Communautés",
                &[
                    "Réseau Proxmox France, forums Spiceworks",
                    "Groupes Discord/Reddit dédiés à la cybersécurité",
                    "Meetups locaux autour de l'IT en Nouvelle-Calédonie",
                ],
            ),
            source(
                "sources-terrain",
                "Sur le terrain",
                &[
                    "Retours d'expérience des équipes SF2i",
                    "Partage de bonnes pratiques avec la DSI de la Mairie de Nouméa",
                    "Échanges avec les prestataires et partenaires techniques",
                ],
            ),
        ],
        roadmap: vec![
            step(
                "roadmap-q1",
                "Trimestre 1",
                &[
                    "Évaluer les nouveautés Proxmox Backup Server 3.x",
                    "Mettre à jour les scripts de supervision pour les serveurs critiques",
                ],
            ),
            step(
                "roadmap-q2",
                "Trimestre 2",
                &[
                    "Tester l'intégration d'une solution EDR adaptée au secteur public",
                    "Documenter une procédure PRA simplifiée pour les sites secondaires",
                ],
            ),
            step(
                "roadmap-q3",
                "Trimestre 3",
                &[
                    "Déployer un pilote de gestion de parc automatisée",
                    "Organiser un atelier de sensibilisation sécurité pour les agents",
                ],
            ),
        ],
    }
}

pub fn default_contact() -> ContactInfo {
    ContactInfo {
        email: "contact@greg-portfolio.fr".to_string(),
        linkedin_url: "https://linkedin.com".to_string(),
        location_line1: "Nouméa".to_string(),
        location_line2: Some("Nouvelle-Calédonie".to_string()),
    }
}
