//! Hard-coded site content: portfolio projects and authored blog articles.

use crate::content::{Article, parse_blocks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
    pub category: Option<String>,
}

const SITE_AUTHOR: &str = "John Doe";

fn project(title: &str, description: &str, tags: &[&str], category: Option<&str>) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        link: "#".to_string(),
        category: category.map(str::to_string),
    }
}

/// The three projects shown on the home page.
pub fn featured_projects() -> Vec<Project> {
    vec![
        project(
            "Project One",
            "A beautiful web application built with React and TypeScript",
            &["React", "TypeScript", "Tailwind"],
            None,
        ),
        project(
            "Project Two",
            "Mobile-first e-commerce platform with modern design",
            &["Next.js", "Redux", "Node.js"],
            None,
        ),
        project(
            "Project Three",
            "Real-time dashboard with data visualization",
            &["React", "D3.js", "Firebase"],
            None,
        ),
    ]
}

/// Every project on the portfolio page.
pub fn projects() -> Vec<Project> {
    const WEB_DEV: Option<&str> = Some("Web Development");
    const WEB_DESIGN: Option<&str> = Some("Web Design");
    vec![
        project(
            "E-commerce Platform",
            "A full-featured e-commerce platform built with React and Node.js",
            &["React", "Node.js", "MongoDB", "Redux"],
            WEB_DEV,
        ),
        project(
            "Portfolio Website",
            "A minimalist portfolio website for a photographer",
            &["Next.js", "Tailwind CSS", "Framer Motion"],
            WEB_DESIGN,
        ),
        project(
            "Task Management App",
            "A collaborative task management application",
            &["React", "Firebase", "Material UI"],
            WEB_DEV,
        ),
        project(
            "Restaurant Website",
            "A modern website for a local restaurant",
            &["HTML", "CSS", "JavaScript"],
            WEB_DESIGN,
        ),
        project(
            "Weather Dashboard",
            "A real-time weather dashboard with data visualization",
            &["React", "D3.js", "Weather API"],
            WEB_DEV,
        ),
        project(
            "Blog Platform",
            "A custom blog platform with CMS integration",
            &["Next.js", "Sanity.io", "Tailwind CSS"],
            WEB_DEV,
        ),
    ]
}

const TYPESCRIPT_BODY: &str = r#"
TypeScript is a powerful superset of JavaScript that adds static typing to the language.
This makes it easier to write and maintain large applications by catching errors early in development.

## Why TypeScript?

TypeScript offers several benefits over plain JavaScript:

- Static typing
- Better IDE support
- Enhanced code readability
- Improved maintainability

## Getting Started

To start using TypeScript in your project, you first need to install it:

```bash
npm install typescript --save-dev
```

Then, create a tsconfig.json file:

```json
{
  "compilerOptions": {
    "target": "es5",
    "module": "commonjs",
    "strict": true
  }
}
```

## Basic Types

TypeScript includes several basic types:

```typescript
let isDone: boolean = false;
let decimal: number = 6;
let color: string = "blue";
let list: number[] = [1, 2, 3];
```

## Interfaces

Interfaces are one of TypeScript's core features:

```typescript
interface User {
  name: string;
  id: number;
}

const user: User = {
  name: "John",
  id: 1,
};
```

## Conclusion

TypeScript is an excellent choice for large-scale JavaScript projects.
It provides the benefits of static typing while maintaining the flexibility of JavaScript.
"#;

const REACT_BODY: &str = r#"
Component-driven UIs stay maintainable when each piece owns as little state as possible.

## Patterns worth knowing

1. Lift state to the closest common parent
2. Derive values instead of storing them
3. Keep effects at the edges

```tsx
const visible = posts.filter((p) => p.title.includes(query));
```
"#;

const TAILWIND_BODY: &str = r#"
Utility classes move styling decisions next to the markup they affect.

## What changes

- No naming of one-off classes
- Design tokens enforced by configuration
- Dead styles purged at build time
"#;

const GIT_BODY: &str = r#"
A shared branching model keeps a team's history readable.

## Everyday commands

```bash
git switch -c feature/search
git rebase origin/main
git push --force-with-lease
```

Prefer small, reviewable commits over one large drop at the end.
"#;

const RESPONSIVE_BODY: &str = r#"
Responsive layouts start from the smallest screen and add complexity as room allows.

## Checklist

- Fluid grids and relative units
- Images that scale with their container
- Breakpoints chosen by content, not by device
"#;

const ACCESSIBILITY_BODY: &str = r#"
Accessible sites work for everyone, including people using assistive technology.

## Start with the basics

1. Use semantic elements
2. Provide text alternatives for images
3. Keep every control reachable by keyboard
"#;

fn article(
    slug: &str,
    title: &str,
    excerpt: &str,
    date: &str,
    read_time: &str,
    category: &str,
    tags: &[&str],
    body: &str,
) -> Article {
    Article {
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        date: date.to_string(),
        read_time: read_time.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        author: SITE_AUTHOR.to_string(),
        blocks: parse_blocks(body),
    }
}

/// Authored articles, newest first.
pub fn articles() -> Vec<Article> {
    vec![
        article(
            "getting-started-with-typescript",
            "Getting Started with TypeScript",
            "Learn the basics of TypeScript and how it can improve your JavaScript development workflow.",
            "March 15, 2024",
            "5 min read",
            "Development",
            &["TypeScript", "JavaScript", "Web Development"],
            TYPESCRIPT_BODY,
        ),
        article(
            "building-modern-uis-with-react",
            "Building Modern UIs with React",
            "Explore best practices and patterns for creating beautiful user interfaces with React.",
            "March 10, 2024",
            "8 min read",
            "Development",
            &["React", "UI/UX", "Web Development"],
            REACT_BODY,
        ),
        article(
            "power-of-tailwind-css",
            "The Power of Tailwind CSS",
            "Discover how Tailwind CSS can streamline your styling workflow and boost productivity.",
            "March 5, 2024",
            "6 min read",
            "Design",
            &["CSS", "Tailwind", "Web Design"],
            TAILWIND_BODY,
        ),
        article(
            "mastering-git-workflows",
            "Mastering Git Workflows",
            "Learn advanced Git techniques and workflows for better team collaboration.",
            "March 1, 2024",
            "10 min read",
            "Development",
            &["Git", "DevOps", "Collaboration"],
            GIT_BODY,
        ),
        article(
            "responsive-design-best-practices",
            "Responsive Design Best Practices",
            "Essential tips and techniques for creating responsive web designs that work across all devices.",
            "February 25, 2024",
            "7 min read",
            "Design",
            &["Responsive Design", "CSS", "Web Design"],
            RESPONSIVE_BODY,
        ),
        article(
            "introduction-to-web-accessibility",
            "Introduction to Web Accessibility",
            "Understanding the importance of web accessibility and how to implement it in your projects.",
            "February 20, 2024",
            "9 min read",
            "Development",
            &["Accessibility", "HTML", "Web Development"],
            ACCESSIBILITY_BODY,
        ),
    ]
}
