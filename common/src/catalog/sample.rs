use crate::model::project::{ProjectImages, ProjectRecord};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn images(img1: &str, img2: &str, img3: &str) -> ProjectImages {
    ProjectImages {
        img1: Some(img1.to_string()),
        img2: Some(img2.to_string()),
        img3: Some(img3.to_string()),
    }
}

/// The embedded project collection, served when no live data is available.
pub fn sample_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: "project-1".to_string(),
            title: "Designo Multi-Page Website".to_string(),
            description: "A multi-page website built with Next.js and Tailwind CSS, featuring \
                responsive design, interactive maps with Leaflet, and pixel-perfect replication \
                of the provided Figma file."
                .to_string(),
            full_description: "The Designo Multi-Page Website was created from a Frontend Mentor \
                challenge. I used Next.js for routing and performance, Tailwind CSS for styling, \
                and Leaflet for interactive map integration on the contact page. One of the \
                highlights of this project was successfully replicating the provided Figma design \
                to a high degree of accuracy, ensuring that typography, spacing, and \
                responsiveness matched perfectly."
                .to_string(),
            key_features: strings(&[
                "Multi-page responsive layout",
                "Interactive maps using Leaflet",
                "Pixel-perfect design replication from Figma",
                "Next.js for server-side rendering and routing",
                "Dark mode support",
            ]),
            technologies: strings(&["Next.js", "Tailwind CSS", "Leaflet"]),
            category: "Website".to_string(),
            image: images(
                "/images/designo1.jpeg",
                "/images/designo2.jpeg",
                "/images/designo3.jpeg",
            ),
            github: Some("https://github.com/Kolahub/Designo".to_string()),
            live_demo: Some("https://designo-kola.vercel.app/".to_string()),
            date: Some("2025".to_string()),
            client: Some("Personal Project".to_string()),
            featured: true,
        },
        ProjectRecord {
            id: "project-2".to_string(),
            title: "Invoice Web App".to_string(),
            description: "A full-stack invoice management application built with the MERN stack. \
                Includes dynamic invoice creation, status updates, and persistent theme state."
                .to_string(),
            full_description: "The Invoice App is a full-stack application built with MongoDB, \
                Express, React, and Node.js. I used React Router for client-side routing and \
                TanStack Query to handle data fetching, caching, and syncing. The app allows users \
                to create, edit, and delete invoices, with state management ensuring \
                responsiveness. It includes theme state persistence without authentication."
                .to_string(),
            key_features: strings(&[
                "CRUD operations for invoices",
                "Filter invoices by status (Paid, Pending, Draft)",
                "TanStack Query for efficient data handling",
                "Theme toggle with MERN persistence",
                "Responsive design across all screen sizes",
            ]),
            technologies: strings(&[
                "React.js",
                "MongoDB",
                "Express",
                "Node.js",
                "TanStack Query",
                "Tailwind CSS",
            ]),
            category: "Web App".to_string(),
            image: images(
                "/images/invoice1.jpg",
                "/images/invoice2.jpg",
                "/images/invoice3.jpg",
            ),
            github: Some("https://github.com/Kolahub/invoice-web-app".to_string()),
            live_demo: Some("https://invoice-web-app-chi.vercel.app/".to_string()),
            date: Some("2025".to_string()),
            client: Some("Personal Project".to_string()),
            featured: true,
        },
        ProjectRecord {
            id: "project-3".to_string(),
            title: "DevJobs Web App".to_string(),
            description: "A job board web app built with Next.js, featuring job listings, detailed \
                job views, and filtering by location and role. Designed to be fully responsive \
                and accessible."
                .to_string(),
            full_description: "DevJobs is a frontend project I built using Next.js to practice \
                server-side rendering and file-based routing. It showcases job listings with \
                detailed views and allows users to filter jobs by title, location, and contract \
                type. I focused on dynamic routing, responsive layouts, and integrating mock JSON \
                data efficiently."
                .to_string(),
            key_features: strings(&[
                "Built with Next.js for static generation and routing",
                "Dynamic filtering by job role, location, and contract type",
                "Responsive layout for desktop and mobile devices",
                "Theme toggle with persisted state using localStorage",
                "Animated UI using Framer Motion",
            ]),
            technologies: strings(&["Next.js", "Tailwind CSS", "Framer Motion"]),
            category: "Web App".to_string(),
            image: images(
                "/images/devjobs1.jpg",
                "/images/devjobs2.jpg",
                "/images/devjobs3.jpg",
            ),
            github: Some("https://github.com/Kolahub/job-board".to_string()),
            live_demo: Some("https://devjobs-kola.vercel.app/".to_string()),
            date: Some("2025".to_string()),
            client: Some("Personal Project".to_string()),
            featured: true,
        },
    ]
}
